//! Loan (borrow) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use utoipa::ToSchema;

/// Request code handed to the borrower and presented again on return
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct LoanCode(String);

impl LoanCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LoanCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for LoanCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl Borrow<str> for LoanCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoanCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One outstanding loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoanRecord {
    /// Request code issued for this loan
    pub code: LoanCode,
    /// Borrowed title
    pub title: String,
    /// When the code was issued
    pub borrowed_at: DateTime<Utc>,
}

/// Circulation counters taken from one ledger snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LedgerStats {
    /// Titles in the catalog
    pub total: usize,
    /// Titles currently on the shelf
    pub available: usize,
    /// Titles currently out
    pub on_loan: usize,
    /// Request codes issued since startup
    pub codes_issued: u32,
}
