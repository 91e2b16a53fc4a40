//! Catalog snapshot

use indexmap::IndexSet;

/// Ordered set of unique titles, in first-seen order.
///
/// A catalog never changes once built; a reload produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    titles: IndexSet<String>,
}

impl Catalog {
    /// Build a catalog, keeping only the first occurrence of each title
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }
}
