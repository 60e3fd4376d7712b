use axum::{
    Router,
    routing::{get, post, put},
};

pub mod auth;
pub mod common;
pub mod posts;
pub mod system;
pub mod users;

/// Router for the blog endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/:post_id",
            put(posts::update_post).delete(posts::delete_post),
        )
}
