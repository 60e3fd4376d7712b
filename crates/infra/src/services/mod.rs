//! Blog operations over injected stores.
//!
//! These are the only places that combine the domain rules (`inkpost-blog`),
//! the credential checks (`inkpost-auth`) and storage.

pub mod posts;
pub mod users;

pub use posts::PostCollection;
pub use users::UserRegistry;
