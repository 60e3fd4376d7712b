use std::sync::Arc;

use inkpost_infra::{
    InMemoryPostStore, InMemoryUserStore, PostCollection, PostStore, UserRegistry, UserStore,
};

/// Shared services handed to every handler.
///
/// Stores sit behind trait objects so a different backend can be swapped in
/// without touching the routes.
#[derive(Clone)]
pub struct AppServices {
    pub users: UserRegistry<Arc<dyn UserStore>>,
    pub posts: PostCollection<Arc<dyn PostStore>>,
}

impl AppServices {
    pub fn new(users: Arc<dyn UserStore>, posts: Arc<dyn PostStore>) -> Self {
        Self {
            users: UserRegistry::new(users),
            posts: PostCollection::new(posts),
        }
    }
}

/// In-memory wiring: both collections live until the process exits.
pub fn build_services() -> AppServices {
    let users: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
    let posts: Arc<dyn PostStore> = Arc::new(InMemoryPostStore::new());
    AppServices::new(users, posts)
}
