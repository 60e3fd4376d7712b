use std::sync::{Arc, RwLock};

use inkpost_blog::User;
use inkpost_core::DomainResult;

/// Append-only user storage in registration order.
pub trait UserStore: Send + Sync {
    fn list(&self) -> DomainResult<Vec<User>>;

    /// Append `user` if `admit` accepts it against the current contents.
    ///
    /// The admission check and the append are atomic.
    fn append_if(
        &self,
        user: User,
        admit: &dyn Fn(&[User], &User) -> DomainResult<()>,
    ) -> DomainResult<User>;
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn list(&self) -> DomainResult<Vec<User>> {
        (**self).list()
    }

    fn append_if(
        &self,
        user: User,
        admit: &dyn Fn(&[User], &User) -> DomainResult<()>,
    ) -> DomainResult<User> {
        (**self).append_if(user, admit)
    }
}

/// In-memory user store; lives as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn list(&self) -> DomainResult<Vec<User>> {
        Ok(super::read(&self.inner)?.clone())
    }

    fn append_if(
        &self,
        user: User,
        admit: &dyn Fn(&[User], &User) -> DomainResult<()>,
    ) -> DomainResult<User> {
        let mut users = super::write(&self.inner)?;
        admit(users.as_slice(), &user)?;
        users.push(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpost_blog::ensure_unique;
    use inkpost_core::DomainError;

    #[test]
    fn append_preserves_registration_order() {
        let store = InMemoryUserStore::new();
        store.append_if(User::new("a", "a@x", "1"), &ensure_unique).unwrap();
        store.append_if(User::new("b", "b@x", "2"), &ensure_unique).unwrap();

        let names: Vec<_> = store.list().unwrap().into_iter().map(|u| u.username).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn rejected_user_is_not_stored() {
        let store = InMemoryUserStore::new();
        store.append_if(User::new("a", "a@x", "1"), &ensure_unique).unwrap();

        let err = store
            .append_if(User::new("a", "other@x", "2"), &ensure_unique)
            .unwrap_err();
        assert_eq!(err, DomainError::Conflict);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn shared_through_arc() {
        let store = Arc::new(InMemoryUserStore::new());
        let other = store.clone();
        store.append_if(User::new("a", "a@x", "1"), &ensure_unique).unwrap();
        assert_eq!(other.list().unwrap().len(), 1);
    }
}
