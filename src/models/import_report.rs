//! Report produced by a catalog import

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What a catalog load found in its source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImportReport {
    /// Unique titles kept
    pub titles: usize,
    /// Data rows examined (header excluded)
    pub rows_read: usize,
    /// Rows dropped because they were too short or had a blank title
    pub skipped_rows: usize,
    /// Rows whose title had already been seen
    pub duplicate_rows: usize,
    /// Zero-based index of the `title` column, if one was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_column: Option<usize>,
}
