//! Infrastructure layer: storage adapters and the services built on them.

pub mod services;
pub mod store;

pub use services::{PostCollection, UserRegistry};
pub use store::{InMemoryPostStore, InMemoryUserStore, PostStore, UserStore};
