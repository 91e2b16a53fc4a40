//! Catalog browsing and reload service

use std::path::PathBuf;

use crate::{
    error::AppResult,
    import,
    models::{ImportReport, Item},
    repository::Repository,
};

/// Number of titles offered for autocomplete when no limit is given
pub const DEFAULT_TITLE_LIMIT: usize = 500;

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    source: PathBuf,
}

impl CatalogService {
    pub fn new(repository: Repository, source: impl Into<PathBuf>) -> Self {
        Self {
            repository,
            source: source.into(),
        }
    }

    /// Every item with its availability, optionally only the first `limit`
    pub fn list_items(&self, limit: Option<usize>) -> AppResult<Vec<Item>> {
        let mut items = self.repository.ledger.snapshot()?;
        if let Some(limit) = limit {
            items.truncate(limit);
        }
        Ok(items)
    }

    /// Titles for autocomplete, in catalog order
    pub fn titles(&self, limit: Option<usize>) -> AppResult<Vec<String>> {
        let catalog = self.repository.ledger.catalog()?;
        Ok(catalog
            .titles()
            .take(limit.unwrap_or(DEFAULT_TITLE_LIMIT))
            .map(str::to_string)
            .collect())
    }

    /// Report of the import behind the current catalog
    pub fn import_report(&self) -> AppResult<ImportReport> {
        self.repository.last_import()
    }

    /// Re-read the catalog file and swap it in.
    ///
    /// Unlike startup, a read failure here is reported and the current
    /// catalog stays in place.
    pub async fn reload(&self) -> AppResult<ImportReport> {
        let parsed = import::load_catalog(&self.source).await?;
        let report = self.repository.replace_catalog(parsed)?;
        tracing::info!("Catalog reloaded: {} titles", report.titles);
        Ok(report)
    }
}
