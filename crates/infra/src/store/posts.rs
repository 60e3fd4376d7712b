use std::sync::{Arc, RwLock};

use inkpost_blog::{Post, PostPatch};
use inkpost_core::{DomainError, DomainResult, PostIndex, Resource};

/// Ordered post storage addressed by position.
///
/// `update` and `remove` run `guard` against the stored post before touching
/// it; a guard error leaves the post as it was.
pub trait PostStore: Send + Sync {
    fn list(&self) -> DomainResult<Vec<Post>>;

    /// Append and return the position the post landed at.
    fn append(&self, post: Post) -> DomainResult<(PostIndex, Post)>;

    fn get(&self, index: PostIndex) -> DomainResult<Post>;

    fn update(
        &self,
        index: PostIndex,
        guard: &dyn Fn(&Post) -> DomainResult<()>,
        patch: PostPatch,
    ) -> DomainResult<Post>;

    /// Remove the post at `index`; every later post moves down by one.
    fn remove(&self, index: PostIndex, guard: &dyn Fn(&Post) -> DomainResult<()>) -> DomainResult<Post>;
}

impl<S> PostStore for Arc<S>
where
    S: PostStore + ?Sized,
{
    fn list(&self) -> DomainResult<Vec<Post>> {
        (**self).list()
    }

    fn append(&self, post: Post) -> DomainResult<(PostIndex, Post)> {
        (**self).append(post)
    }

    fn get(&self, index: PostIndex) -> DomainResult<Post> {
        (**self).get(index)
    }

    fn update(
        &self,
        index: PostIndex,
        guard: &dyn Fn(&Post) -> DomainResult<()>,
        patch: PostPatch,
    ) -> DomainResult<Post> {
        (**self).update(index, guard, patch)
    }

    fn remove(&self, index: PostIndex, guard: &dyn Fn(&Post) -> DomainResult<()>) -> DomainResult<Post> {
        (**self).remove(index, guard)
    }
}

/// In-memory post store backed by a `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryPostStore {
    inner: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn locate(index: PostIndex, len: usize) -> DomainResult<usize> {
    index
        .resolve(len)
        .ok_or(DomainError::not_found(Resource::Post))
}

impl PostStore for InMemoryPostStore {
    fn list(&self) -> DomainResult<Vec<Post>> {
        Ok(super::read(&self.inner)?.clone())
    }

    fn append(&self, post: Post) -> DomainResult<(PostIndex, Post)> {
        let mut posts = super::write(&self.inner)?;
        let index = PostIndex::from(posts.len());
        posts.push(post.clone());
        Ok((index, post))
    }

    fn get(&self, index: PostIndex) -> DomainResult<Post> {
        let posts = super::read(&self.inner)?;
        let at = locate(index, posts.len())?;
        Ok(posts[at].clone())
    }

    fn update(
        &self,
        index: PostIndex,
        guard: &dyn Fn(&Post) -> DomainResult<()>,
        patch: PostPatch,
    ) -> DomainResult<Post> {
        let mut posts = super::write(&self.inner)?;
        let at = locate(index, posts.len())?;
        let post = &mut posts[at];
        guard(&*post)?;
        post.apply(patch);
        Ok(post.clone())
    }

    fn remove(&self, index: PostIndex, guard: &dyn Fn(&Post) -> DomainResult<()>) -> DomainResult<Post> {
        let mut posts = super::write(&self.inner)?;
        let at = locate(index, posts.len())?;
        guard(&posts[at])?;
        Ok(posts.remove(at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allow(_: &Post) -> DomainResult<()> {
        Ok(())
    }

    fn deny(_: &Post) -> DomainResult<()> {
        Err(DomainError::Forbidden)
    }

    fn seeded(n: usize) -> InMemoryPostStore {
        let store = InMemoryPostStore::new();
        for i in 0..n {
            store.append(Post::new(format!("t{i}"), "c", "alice")).unwrap();
        }
        store
    }

    #[test]
    fn append_reports_position() {
        let store = InMemoryPostStore::new();
        let (first, _) = store.append(Post::new("a", "c", "alice")).unwrap();
        let (second, _) = store.append(Post::new("b", "c", "alice")).unwrap();
        assert_eq!(first, PostIndex::new(0));
        assert_eq!(second, PostIndex::new(1));
    }

    #[test]
    fn out_of_bounds_is_not_found() {
        let store = seeded(2);
        let missing = DomainError::not_found(Resource::Post);
        assert_eq!(store.get(PostIndex::new(2)).unwrap_err(), missing);
        assert_eq!(store.get(PostIndex::new(-1)).unwrap_err(), missing);
        assert_eq!(
            store.update(PostIndex::new(5), &allow, PostPatch::default()).unwrap_err(),
            missing
        );
        assert_eq!(store.remove(PostIndex::new(-3), &allow).unwrap_err(), missing);
    }

    #[test]
    fn bounds_are_checked_before_guard() {
        let store = seeded(1);
        let err = store.remove(PostIndex::new(1), &deny).unwrap_err();
        assert_eq!(err, DomainError::not_found(Resource::Post));
    }

    #[test]
    fn guard_failure_leaves_post_untouched() {
        let store = seeded(1);
        let patch = PostPatch {
            title: Some("changed".into()),
            ..PostPatch::default()
        };
        assert_eq!(
            store.update(PostIndex::new(0), &deny, patch).unwrap_err(),
            DomainError::Forbidden
        );
        assert_eq!(store.get(PostIndex::new(0)).unwrap().title, "t0");

        assert_eq!(store.remove(PostIndex::new(0), &deny).unwrap_err(), DomainError::Forbidden);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn remove_shifts_later_posts_down() {
        let store = seeded(3);
        let removed = store.remove(PostIndex::new(1), &allow).unwrap();
        assert_eq!(removed.title, "t1");

        let titles: Vec<_> = store.list().unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["t0", "t2"]);
        assert_eq!(store.get(PostIndex::new(1)).unwrap().title, "t2");
        assert!(store.get(PostIndex::new(2)).is_err());
    }
}
