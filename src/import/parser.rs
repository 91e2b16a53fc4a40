//! CSV catalog parser
//!
//! The first line is a header; the column named `title` (any case, surrounding
//! whitespace ignored) holds the item titles. Every other column is ignored.

use indexmap::IndexSet;

use crate::models::{Catalog, ImportReport};

const TITLE_HEADER: &str = "title";

/// Catalog built from CSV text together with its import report
#[derive(Debug, Clone, Default)]
pub struct ParsedCatalog {
    pub catalog: Catalog,
    pub report: ImportReport,
}

/// Split one CSV line into fields.
///
/// A `"` toggles quoting and is not kept; commas inside quotes are literal.
/// Quoting still open at end of line is closed silently.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Parse CSV text into a deduplicated catalog.
///
/// Never fails: empty input or a header without a `title` column yields an
/// empty catalog, and unusable rows are counted in the report.
pub fn parse_catalog(text: &str) -> ParsedCatalog {
    let mut lines = text.lines();

    let Some(header) = lines.next() else {
        return ParsedCatalog::default();
    };
    let header = header.trim_start_matches('\u{feff}');

    let Some(title_idx) = split_line(header)
        .iter()
        .position(|h| h.trim().to_lowercase() == TITLE_HEADER)
    else {
        tracing::debug!("Catalog header has no '{}' column: {:?}", TITLE_HEADER, header);
        return ParsedCatalog::default();
    };

    let mut report = ImportReport {
        title_column: Some(title_idx),
        ..ImportReport::default()
    };
    let mut titles = IndexSet::new();

    for line in lines {
        report.rows_read += 1;

        let mut cols = split_line(line);
        if cols.len() <= title_idx {
            report.skipped_rows += 1;
            continue;
        }

        let title = cols.swap_remove(title_idx);
        let title = title.trim();
        if title.is_empty() {
            report.skipped_rows += 1;
            continue;
        }

        if !titles.insert(title.to_string()) {
            report.duplicate_rows += 1;
        }
    }

    report.titles = titles.len();

    ParsedCatalog {
        catalog: Catalog::new(titles),
        report,
    }
}
