//! Catalog search

use crate::{error::AppResult, models::Item, repository::Repository};

/// Items whose title contains `query`, ignoring case, in catalog order.
///
/// A blank query means nothing has been asked yet and matches nothing.
pub fn search_items(query: &str, items: &[Item]) -> Vec<Item> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Clone)]
pub struct SearchService {
    repository: Repository,
}

impl SearchService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search the current ledger snapshot
    pub fn search(&self, query: &str) -> AppResult<Vec<Item>> {
        let snapshot = self.repository.ledger.snapshot()?;
        Ok(search_items(query, &snapshot))
    }
}
