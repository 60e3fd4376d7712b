//! Blog domain module (users and posts).
//!
//! Business rules only: uniqueness of registrations, author stamping and
//! partial-update merging. No IO, no HTTP, no storage.

pub mod post;
pub mod user;

pub use post::{NewPost, Post, PostPatch};
pub use user::{ensure_unique, User};
