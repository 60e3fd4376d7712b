//! Process-local storage for users and posts.
//!
//! Each trait exposes the compound operations the services need as single
//! calls, so an implementation can run the check and the mutation under one
//! lock acquisition.

pub mod posts;
pub mod users;

pub use posts::{InMemoryPostStore, PostStore};
pub use users::{InMemoryUserStore, UserStore};

use std::sync::{PoisonError, RwLockReadGuard, RwLockWriteGuard};

use inkpost_core::DomainError;

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::storage("store lock poisoned")
}

fn read<T>(lock: &std::sync::RwLock<T>) -> Result<RwLockReadGuard<'_, T>, DomainError> {
    lock.read().map_err(poisoned)
}

fn write<T>(lock: &std::sync::RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, DomainError> {
    lock.write().map_err(poisoned)
}
