//! Post routes.
//!
//! Every mutating call carries the caller's username and password, which are
//! checked against the registry before the post operation runs. Posts are
//! addressed by their current position in the list.

use std::sync::Arc;

use axum::extract::Extension;

use inkpost_auth::Credentials;
use inkpost_core::PostIndex;

use crate::app::dto;
use crate::app::extract::{ApiJson, ApiPath};
use crate::app::routes::common::respond;
use crate::app::services::AppServices;

pub async fn list_posts(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    respond(services.posts.list_posts())
}

pub async fn create_post(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<dto::CreatePostRequest>,
) -> axum::response::Response {
    let result = services
        .users
        .login(&body.user)
        .and_then(|principal| services.posts.create_post(body.post, &principal));
    respond(result)
}

pub async fn update_post(
    Extension(services): Extension<Arc<AppServices>>,
    ApiPath(post_id): ApiPath<i64>,
    ApiJson(body): ApiJson<dto::UpdatePostRequest>,
) -> axum::response::Response {
    let index = PostIndex::new(post_id);
    let result = services
        .users
        .login(&body.user)
        .and_then(|principal| services.posts.update_post(index, body.updated_post, &principal));
    respond(result)
}

pub async fn delete_post(
    Extension(services): Extension<Arc<AppServices>>,
    ApiPath(post_id): ApiPath<i64>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> axum::response::Response {
    let index = PostIndex::new(post_id);
    let result = services
        .users
        .login(&credentials)
        .and_then(|principal| services.posts.delete_post(index, &principal));
    respond(result)
}
