use serde::{Deserialize, Serialize};

use inkpost_auth::Account;
use inkpost_core::{DomainError, DomainResult};

/// A registered user.
///
/// Created on registration and never mutated or removed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Whether `other` would clash with this user on username or email.
    pub fn collides_with(&self, other: &User) -> bool {
        self.username == other.username || self.email == other.email
    }
}

impl Account for User {
    fn username(&self) -> &str {
        &self.username
    }

    fn password(&self) -> &str {
        &self.password
    }
}

/// Registration rule: no two users share a username or an email.
pub fn ensure_unique(existing: &[User], candidate: &User) -> DomainResult<()> {
    if existing.iter().any(|u| u.collides_with(candidate)) {
        return Err(DomainError::Conflict);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User::new("alice", "a@x.com", "pw1")
    }

    #[test]
    fn unique_user_is_admitted() {
        let existing = vec![alice()];
        assert!(ensure_unique(&existing, &User::new("bob", "b@x.com", "pw2")).is_ok());
    }

    #[test]
    fn duplicate_username_is_a_conflict() {
        let existing = vec![alice()];
        let err = ensure_unique(&existing, &User::new("alice", "other@x.com", "pw2")).unwrap_err();
        assert_eq!(err, DomainError::Conflict);
    }

    #[test]
    fn duplicate_email_is_a_conflict() {
        let existing = vec![alice()];
        let err = ensure_unique(&existing, &User::new("carol", "a@x.com", "pw3")).unwrap_err();
        assert_eq!(err, DomainError::Conflict);
    }

    #[test]
    fn anything_goes_into_an_empty_registry() {
        assert!(ensure_unique(&[], &alice()).is_ok());
    }

    #[test]
    fn register_body_requires_every_field() {
        let res = serde_json::from_str::<User>(r#"{"username":"alice","password":"pw1"}"#);
        assert!(res.is_err());
    }
}
