use thiserror::Error;

use inkpost_core::DomainError;

use crate::{Credentials, Principal};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("'{principal}' is not the author (author is '{author}')")]
    NotAuthor { principal: String, author: String },
}

impl From<AuthError> for DomainError {
    fn from(value: AuthError) -> Self {
        match value {
            AuthError::InvalidCredentials => DomainError::Unauthorized,
            AuthError::NotAuthor { .. } => DomainError::Forbidden,
        }
    }
}

/// A registered account as seen by the credential check.
pub trait Account {
    fn username(&self) -> &str;
    fn password(&self) -> &str;
}

/// Verify submitted credentials against registered accounts.
///
/// Linear scan for an exact username + password match; plaintext comparison,
/// no lockout. The first matching account wins.
pub fn authenticate<'a, A, I>(accounts: I, credentials: &Credentials) -> Result<Principal, AuthError>
where
    A: Account + 'a,
    I: IntoIterator<Item = &'a A>,
{
    let matched = accounts.into_iter().any(|account| {
        account.username() == credentials.username && account.password() == credentials.password
    });

    if matched {
        Ok(Principal::new(credentials.username.clone()))
    } else {
        tracing::warn!(username = %credentials.username, "credential check failed");
        Err(AuthError::InvalidCredentials)
    }
}

/// Author-ownership check: only the author of a post may change it.
pub fn authorize_author(principal: &Principal, author: &str) -> Result<(), AuthError> {
    if principal.username() == author {
        Ok(())
    } else {
        Err(AuthError::NotAuthor {
            principal: principal.username().to_string(),
            author: author.to_string(),
        })
    }
}
