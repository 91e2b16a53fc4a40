//! Catalog file loading

use std::path::Path;

use crate::error::AppResult;

use super::parser::{parse_catalog, ParsedCatalog};

/// Read and parse the catalog file, propagating read errors.
pub async fn load_catalog(path: impl AsRef<Path>) -> AppResult<ParsedCatalog> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path).await?;
    let parsed = parse_catalog(&text);

    tracing::info!(
        "Loaded {} titles from {} ({} rows, {} skipped, {} duplicates)",
        parsed.report.titles,
        path.display(),
        parsed.report.rows_read,
        parsed.report.skipped_rows,
        parsed.report.duplicate_rows
    );
    if parsed.report.title_column.is_none() {
        tracing::warn!("No 'title' column in {}; catalog is empty", path.display());
    }

    Ok(parsed)
}

/// Startup variant: a missing or unreadable file gives an empty catalog.
pub async fn load_catalog_or_empty(path: impl AsRef<Path>) -> ParsedCatalog {
    let path = path.as_ref();
    match load_catalog(path).await {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Could not load catalog from {}: {}", path.display(), e);
            ParsedCatalog::default()
        }
    }
}
