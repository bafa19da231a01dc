//! Ordered conventions: optional predicate plus producer

use std::fmt;
use std::sync::Arc;

type Predicate<I> = Arc<dyn Fn(&I) -> bool + Send + Sync>;
type Producer<I, O> = Arc<dyn Fn(&I) -> O + Send + Sync>;

/// Produces a value for inputs its predicate accepts
pub struct Convention<I, O> {
    when: Option<Predicate<I>>,
    produce: Producer<I, O>,
}

impl<I, O> Convention<I, O> {
    /// Convention that applies to every input
    pub fn by<F>(produce: F) -> Self
    where
        F: Fn(&I) -> O + Send + Sync + 'static,
    {
        Self {
            when: None,
            produce: Arc::new(produce),
        }
    }

    /// Restrict the convention to inputs matching `when`
    pub fn when<P>(mut self, when: P) -> Self
    where
        P: Fn(&I) -> bool + Send + Sync + 'static,
    {
        self.when = Some(Arc::new(when));
        self
    }

    pub fn applies_to(&self, input: &I) -> bool {
        self.when.as_ref().is_none_or(|when| when(input))
    }

    pub fn apply(&self, input: &I) -> O {
        (self.produce)(input)
    }
}

impl<I, O> Clone for Convention<I, O> {
    fn clone(&self) -> Self {
        Self {
            when: self.when.clone(),
            produce: Arc::clone(&self.produce),
        }
    }
}

/// Single-valued configuration; the first applicable convention wins
pub struct Conventions<I, O> {
    items: Vec<Convention<I, O>>,
}

impl<I, O> Conventions<I, O> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a convention applying to every input
    pub fn set<F>(&mut self, produce: F) -> &mut Self
    where
        F: Fn(&I) -> O + Send + Sync + 'static,
    {
        self.items.push(Convention::by(produce));
        self
    }

    /// Append a convention applying to inputs matching `when`
    pub fn set_when<P, F>(&mut self, when: P, produce: F) -> &mut Self
    where
        P: Fn(&I) -> bool + Send + Sync + 'static,
        F: Fn(&I) -> O + Send + Sync + 'static,
    {
        self.items.push(Convention::by(produce).when(when));
        self
    }

    pub fn push(&mut self, convention: Convention<I, O>) -> &mut Self {
        self.items.push(convention);
        self
    }

    /// Append the conventions of `other` after the existing ones
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        self.items.extend(other.items.iter().cloned());
        self
    }

    pub fn get(&self, input: &I) -> Option<O> {
        self.items
            .iter()
            .find(|c| c.applies_to(input))
            .map(|c| c.apply(input))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<I, O> Default for Conventions<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> Clone for Conventions<I, O> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<I, O> fmt::Debug for Conventions<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conventions").field("count", &self.items.len()).finish()
    }
}

/// List-valued configuration.
///
/// Every applicable convention contributes to the result, in order. A
/// matching `none_when` predicate empties the result regardless of order.
pub struct ListConventions<I, O> {
    items: Vec<Convention<I, Vec<O>>>,
    none_when: Vec<Predicate<I>>,
}

impl<I, O> ListConventions<I, O> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            none_when: Vec::new(),
        }
    }

    pub fn add<F>(&mut self, produce: F) -> &mut Self
    where
        F: Fn(&I) -> Vec<O> + Send + Sync + 'static,
    {
        self.items.push(Convention::by(produce));
        self
    }

    pub fn add_when<P, F>(&mut self, when: P, produce: F) -> &mut Self
    where
        P: Fn(&I) -> bool + Send + Sync + 'static,
        F: Fn(&I) -> Vec<O> + Send + Sync + 'static,
    {
        self.items.push(Convention::by(produce).when(when));
        self
    }

    /// Produce nothing for inputs matching `when`
    pub fn none_when<P>(&mut self, when: P) -> &mut Self
    where
        P: Fn(&I) -> bool + Send + Sync + 'static,
    {
        self.none_when.push(Arc::new(when));
        self
    }

    pub fn merge(&mut self, other: &Self) -> &mut Self {
        self.items.extend(other.items.iter().cloned());
        self.none_when.extend(other.none_when.iter().cloned());
        self
    }

    pub fn get(&self, input: &I) -> Vec<O> {
        if self.none_when.iter().any(|when| when(input)) {
            return Vec::new();
        }

        self.items
            .iter()
            .filter(|c| c.applies_to(input))
            .flat_map(|c| c.apply(input))
            .collect()
    }
}

impl<I, O: Clone + Send + Sync + 'static> ListConventions<I, O> {
    /// Add fixed values for inputs matching `when`
    pub fn add_values_when<P>(&mut self, values: Vec<O>, when: P) -> &mut Self
    where
        P: Fn(&I) -> bool + Send + Sync + 'static,
    {
        self.add_when(when, move |_| values.clone())
    }
}

impl<I, O> Default for ListConventions<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> Clone for ListConventions<I, O> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            none_when: self.none_when.clone(),
        }
    }
}

impl<I, O> fmt::Debug for ListConventions<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListConventions")
            .field("count", &self.items.len())
            .field("none_when", &self.none_when.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let mut ids: Conventions<i32, String> = Conventions::new();
        ids.set_when(|n| *n < 0, |_| "negative".to_string())
            .set_when(|n| *n < 10, |_| "small".to_string())
            .set(|n| n.to_string());

        assert_eq!(ids.get(&-1).as_deref(), Some("negative"));
        assert_eq!(ids.get(&3).as_deref(), Some("small"));
        assert_eq!(ids.get(&42).as_deref(), Some("42"));
    }

    #[test]
    fn test_no_match() {
        let mut ids: Conventions<i32, String> = Conventions::new();
        ids.set_when(|n| *n > 0, |n| n.to_string());
        assert_eq!(ids.get(&0), None);
    }

    #[test]
    fn test_merge_appends() {
        let mut first: Conventions<i32, &'static str> = Conventions::new();
        first.set_when(|n| *n == 1, |_| "first");
        let mut second: Conventions<i32, &'static str> = Conventions::new();
        second.set(|_| "second");

        first.merge(&second);

        assert_eq!(first.get(&1), Some("first"));
        assert_eq!(first.get(&2), Some("second"));
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_list_conventions_accumulate() {
        let mut marks: ListConventions<i32, &'static str> = ListConventions::new();
        marks
            .add_values_when(vec!["even"], |n| n % 2 == 0)
            .add_values_when(vec!["big"], |n| *n > 100)
            .add(|_| vec!["number"]);

        assert_eq!(marks.get(&102), vec!["even", "big", "number"]);
        assert_eq!(marks.get(&3), vec!["number"]);
    }

    #[test]
    fn test_none_when_overrides() {
        let mut marks: ListConventions<i32, &'static str> = ListConventions::new();
        marks.add(|_| vec!["number"]);
        marks.none_when(|n| *n == 0);

        assert!(marks.get(&0).is_empty());
        assert_eq!(marks.get(&1), vec!["number"]);
    }
}
