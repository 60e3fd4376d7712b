//! Domain error model.

use thiserror::Error;

/// Result type used across the domain and storage layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// The collection a `NotFound` refers to.
///
/// The two cases carry different client-facing messages (and the API maps
/// them to different status codes), so the variant keeps track of which one
/// came up empty.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Resource {
    /// The user registry has no entries at all.
    Users,
    /// A post index does not address a stored post.
    Post,
}

impl Resource {
    pub fn missing_message(self) -> &'static str {
        match self {
            Resource::Users => "No any users Registered",
            Resource::Post => "Post not found",
        }
    }
}

/// Domain-level error.
///
/// Display strings are the static, human-readable messages returned to
/// clients; the API layer decides the status code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Username or email collides with a registered user.
    #[error("Username or email already exists")]
    Conflict,

    /// Credentials did not match any registered user.
    #[error("Login failed")]
    Unauthorized,

    /// The authenticated user does not own the target post.
    #[error("You are not the author of this post")]
    Forbidden,

    /// The requested resource does not exist.
    #[error("{}", .0.missing_message())]
    NotFound(Resource),

    /// The backing store failed (e.g. a poisoned lock).
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(resource: Resource) -> Self {
        Self::NotFound(resource)
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_client_messages() {
        assert_eq!(DomainError::Conflict.to_string(), "Username or email already exists");
        assert_eq!(DomainError::Unauthorized.to_string(), "Login failed");
        assert_eq!(
            DomainError::Forbidden.to_string(),
            "You are not the author of this post"
        );
        assert_eq!(
            DomainError::not_found(Resource::Users).to_string(),
            "No any users Registered"
        );
        assert_eq!(DomainError::not_found(Resource::Post).to_string(), "Post not found");
    }

    #[test]
    fn storage_error_keeps_cause() {
        let err = DomainError::storage("lock poisoned");
        assert_eq!(err.to_string(), "storage failure: lock poisoned");
    }
}
