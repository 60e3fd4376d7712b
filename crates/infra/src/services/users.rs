use inkpost_auth::{authenticate, Credentials, Principal};
use inkpost_blog::{ensure_unique, User};
use inkpost_core::{DomainError, DomainResult, Resource};

use crate::store::UserStore;

/// Registration, listing and credential checks over a `UserStore`.
#[derive(Debug, Clone)]
pub struct UserRegistry<S> {
    store: S,
}

impl<S: UserStore> UserRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All registered users; an empty registry is reported as `NotFound`.
    pub fn list_users(&self) -> DomainResult<Vec<User>> {
        let users = self.store.list()?;
        if users.is_empty() {
            return Err(DomainError::not_found(Resource::Users));
        }
        tracing::debug!(count = users.len(), "listed users");
        Ok(users)
    }

    pub fn register(&self, user: User) -> DomainResult<User> {
        match self.store.append_if(user, &ensure_unique) {
            Ok(stored) => {
                tracing::info!(username = %stored.username, "user registered");
                Ok(stored)
            }
            Err(e) => {
                tracing::warn!(error = %e, "registration rejected");
                Err(e)
            }
        }
    }

    /// Verify credentials; used by the login endpoint and by every
    /// post-mutating call.
    pub fn login(&self, credentials: &Credentials) -> DomainResult<Principal> {
        let users = self.store.list()?;
        let principal = authenticate(&users, credentials)?;
        tracing::debug!(username = %principal, "credentials accepted");
        Ok(principal)
    }
}
