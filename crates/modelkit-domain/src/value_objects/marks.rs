//! Marks value object
//!
//! Free-form string tags attached to types, members, operations and
//! parameters. Only membership matters; marks carry no values.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered, duplicate-free set of string tags.
///
/// Insertion order is kept so that object models list marks the way the
/// coding style produced them.
///
/// # Examples
/// ```
/// # use modelkit_domain::Marks;
/// let marks = Marks::new(["cached", "search", "cached"]);
/// assert!(marks.has("search"));
/// assert_eq!(marks.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Marks(SmallVec<[String; 4]>);

impl Marks {
    /// Build marks from any list of tags, dropping duplicates
    pub fn new<I, S>(marks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut result = Self::default();
        for mark in marks {
            result.insert(mark);
        }
        result
    }

    /// Empty mark set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a mark; returns `false` when it was already present
    pub fn insert(&mut self, mark: impl Into<String>) -> bool {
        let mark = mark.into();
        if self.has(&mark) {
            return false;
        }
        self.0.push(mark);
        true
    }

    /// Membership test
    pub fn has(&self, mark: &str) -> bool {
        self.0.iter().any(|m| m == mark)
    }

    /// Marks in insertion order
    pub fn list(&self) -> Vec<String> {
        self.0.to_vec()
    }

    /// Iterate over the marks
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of distinct marks
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no marks
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Marks {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<S: Into<String>> Extend<S> for Marks {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for mark in iter {
            self.insert(mark);
        }
    }
}

impl IntoIterator for Marks {
    type Item = String;
    type IntoIter = smallvec::IntoIter<[String; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_dropped() {
        let marks = Marks::new(vec!["a", "b", "a"]);
        assert_eq!(marks.list(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_membership() {
        let marks: Marks = ["heavy"].into_iter().collect();
        assert!(marks.has("heavy"));
        assert!(!marks.has("Heavy"));
        assert!(!Marks::empty().has("heavy"));
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut marks = Marks::new(["x"]);
        marks.extend(["z", "x", "y"]);
        assert_eq!(marks.iter().collect::<Vec<_>>(), vec!["x", "z", "y"]);
    }

    #[test]
    fn test_serializes_as_list() {
        let marks = Marks::new(["a", "b"]);
        let json = serde_json::to_string(&marks).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }
}
