//! Data models for the circulation desk

pub mod catalog;
pub mod import_report;
pub mod item;
pub mod loan;

// Re-export commonly used types
pub use catalog::Catalog;
pub use import_report::ImportReport;
pub use item::Item;
pub use loan::{LedgerStats, LoanCode, LoanRecord};
