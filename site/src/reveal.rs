//! Scroll-triggered fade-in.
//!
//! Cards, feature items and news items fade in the first time they scroll
//! into view and stay visible afterwards.

use std::collections::BTreeSet;

/// Elements that animate into view.
pub const REVEAL_SELECTORS: &str = ".card, .feature-item, .news-item";
/// Class added to an element once revealed.
pub const REVEAL_CLASS: &str = "fade-in-up";

/// Intersection observer options.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

/// Remembers which targets have been revealed.
#[derive(Debug, Clone)]
pub struct RevealTracker<K: Ord> {
    revealed: BTreeSet<K>,
}

impl<K: Ord + Clone> RevealTracker<K> {
    pub fn new() -> Self {
        Self {
            revealed: BTreeSet::new(),
        }
    }

    /// Process an observer batch of `(target, is_intersecting)` entries,
    /// returning the targets revealed for the first time.
    pub fn observe<I>(&mut self, entries: I) -> Vec<K>
    where
        I: IntoIterator<Item = (K, bool)>,
    {
        entries
            .into_iter()
            .filter(|(_, intersecting)| *intersecting)
            .filter_map(|(target, _)| self.revealed.insert(target.clone()).then_some(target))
            .collect()
    }

    pub fn is_revealed(&self, target: &K) -> bool {
        self.revealed.contains(target)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

impl<K: Ord + Clone> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_once() {
        // GIVEN
        let mut tracker = RevealTracker::new();

        // WHEN
        let first = tracker.observe([(1u32, true), (2, false), (3, true)]);
        let second = tracker.observe([(1u32, true), (2, true), (3, false)]);

        // THEN - leaving the viewport does not hide a target again
        assert_eq!(first, vec![1, 3]);
        assert_eq!(second, vec![2]);
        assert!(tracker.is_revealed(&3));
        assert_eq!(tracker.len(), 3);
    }

    #[test]
    fn test_default_options() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
    }
}
