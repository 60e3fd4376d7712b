use std::sync::Arc;

use axum::extract::Extension;

use inkpost_auth::Credentials;
use inkpost_blog::User;

use crate::app::dto;
use crate::app::extract::ApiJson;
use crate::app::routes::common::respond;
use crate::app::services::AppServices;

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<User>,
) -> axum::response::Response {
    respond(services.users.register(body))
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<Credentials>,
) -> axum::response::Response {
    respond(services.users.login(&body).map(|_| dto::LOGIN_SUCCESSFUL))
}
