//! `inkpost-auth` — credential verification and author-ownership checks.
//!
//! This crate is intentionally decoupled from HTTP and storage: callers hand
//! it the registered accounts and the submitted credentials, and get back a
//! `Principal` (or a denial).

pub mod authorize;
pub mod credentials;
pub mod principal;

pub use authorize::{authenticate, authorize_author, Account, AuthError};
pub use credentials::Credentials;
pub use principal::Principal;
