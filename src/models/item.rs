//! Item (catalog entry) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One catalog entry as seen at a single point in time.
///
/// `available` is derived from the ledger; callers never set it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Exact, case-sensitive title
    pub title: String,
    /// False while a loan is outstanding for this title
    pub available: bool,
}

impl Item {
    pub fn new(title: impl Into<String>, available: bool) -> Self {
        Self {
            title: title.into(),
            available,
        }
    }
}
