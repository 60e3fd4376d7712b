use serde::{Deserialize, Serialize};

use inkpost_auth::Credentials;
use inkpost_blog::{NewPost, PostPatch};

// -------------------------
// Request DTOs
// -------------------------

/// `POST /posts`: the post plus the author's credentials.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub post: NewPost,
    pub user: Credentials,
}

/// `PUT /posts/{post_id}`: the fields to change plus the caller's credentials.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(alias = "post")]
    pub updated_post: PostPatch,
    pub user: Credentials,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub const LOGIN_SUCCESSFUL: MessageResponse = MessageResponse {
    message: "Login successful",
};
