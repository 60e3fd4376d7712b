//! Post identifiers.

use serde::{Deserialize, Serialize};

/// Position of a post in the ordered post sequence, as supplied by a client.
///
/// A raw client value may be negative or past the end; `resolve` turns it
/// into a usable offset against the current length. An index only stays
/// meaningful until an earlier post is deleted, since removal shifts every
/// later position down by one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostIndex(i64);

impl PostIndex {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Offset into a sequence of `len` posts, or `None` when out of bounds.
    pub fn resolve(self, len: usize) -> Option<usize> {
        usize::try_from(self.0).ok().filter(|i| *i < len)
    }
}

impl core::fmt::Display for PostIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for PostIndex {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<usize> for PostIndex {
    fn from(value: usize) -> Self {
        Self(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_in_bounds_offsets() {
        assert_eq!(PostIndex::new(0).resolve(1), Some(0));
        assert_eq!(PostIndex::new(2).resolve(3), Some(2));
    }

    #[test]
    fn resolve_rejects_negative_and_past_end() {
        assert_eq!(PostIndex::new(-1).resolve(3), None);
        assert_eq!(PostIndex::new(3).resolve(3), None);
        assert_eq!(PostIndex::new(0).resolve(0), None);
        assert_eq!(PostIndex::new(i64::MIN).resolve(usize::MAX), None);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&PostIndex::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: PostIndex = serde_json::from_str("-2").unwrap();
        assert_eq!(back, PostIndex::new(-2));
    }
}
