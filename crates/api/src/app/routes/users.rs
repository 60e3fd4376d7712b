use std::sync::Arc;

use axum::extract::Extension;

use crate::app::routes::common::respond;
use crate::app::services::AppServices;

pub async fn list_users(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    respond(services.users.list_users())
}
