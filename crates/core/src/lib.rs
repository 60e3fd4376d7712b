//! `inkpost-core` — shared building blocks for the blog backend.
//!
//! Pure types only: the error taxonomy every layer speaks and the post
//! position identifier used by the HTTP contract.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult, Resource};
pub use id::PostIndex;
