use inkpost_auth::{authorize_author, Principal};
use inkpost_blog::{NewPost, Post, PostPatch};
use inkpost_core::{DomainError, DomainResult, PostIndex};

use crate::store::PostStore;

/// Post CRUD with author-ownership checks over a `PostStore`.
///
/// Callers authenticate first (see `UserRegistry::login`) and pass the
/// resulting `Principal` in.
#[derive(Debug, Clone)]
pub struct PostCollection<S> {
    store: S,
}

fn owned_by(principal: &Principal) -> impl Fn(&Post) -> DomainResult<()> + '_ {
    move |post: &Post| authorize_author(principal, &post.author).map_err(DomainError::from)
}

impl<S: PostStore> PostCollection<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_posts(&self) -> DomainResult<Vec<Post>> {
        self.store.list()
    }

    pub fn get_post(&self, index: PostIndex) -> DomainResult<Post> {
        self.store.get(index)
    }

    /// Store `post` with the principal as author, whatever the client sent.
    pub fn create_post(&self, post: NewPost, principal: &Principal) -> DomainResult<Post> {
        let (index, stored) = self.store.append(post.authored_by(principal))?;
        tracing::info!(%index, author = %stored.author, "post created");
        Ok(stored)
    }

    pub fn update_post(
        &self,
        index: PostIndex,
        patch: PostPatch,
        principal: &Principal,
    ) -> DomainResult<Post> {
        let updated = self
            .store
            .update(index, &owned_by(principal), patch)
            .inspect_err(|e| tracing::warn!(%index, username = %principal, error = %e, "post update rejected"))?;
        tracing::info!(%index, username = %principal, "post updated");
        Ok(updated)
    }

    pub fn delete_post(&self, index: PostIndex, principal: &Principal) -> DomainResult<Post> {
        let removed = self
            .store
            .remove(index, &owned_by(principal))
            .inspect_err(|e| tracing::warn!(%index, username = %principal, error = %e, "post delete rejected"))?;
        tracing::info!(%index, username = %principal, "post deleted");
        Ok(removed)
    }
}
