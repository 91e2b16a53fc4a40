//! Repository layer holding the in-memory circulation state

pub mod codes;
pub mod ledger;

use std::sync::{Arc, RwLock};

use crate::{
    error::{AppError, AppResult},
    import::ParsedCatalog,
    models::ImportReport,
};

pub use codes::CodeGenerator;
pub use ledger::LendingLedger;

/// Main repository struct shared by all services
#[derive(Clone)]
pub struct Repository {
    pub ledger: Arc<LendingLedger>,
    last_import: Arc<RwLock<ImportReport>>,
}

impl Repository {
    /// Create a repository over a freshly parsed catalog
    pub fn new(parsed: ParsedCatalog, codes: CodeGenerator) -> Self {
        Self {
            ledger: Arc::new(LendingLedger::new(parsed.catalog, codes)),
            last_import: Arc::new(RwLock::new(parsed.report)),
        }
    }

    /// Report of the import that produced the current catalog
    pub fn last_import(&self) -> AppResult<ImportReport> {
        self.last_import
            .read()
            .map(|report| report.clone())
            .map_err(|_| AppError::Internal("import report lock poisoned".to_string()))
    }

    /// Replace the catalog and remember the report of the import behind it
    pub fn replace_catalog(&self, parsed: ParsedCatalog) -> AppResult<ImportReport> {
        let mut last_import = self
            .last_import
            .write()
            .map_err(|_| AppError::Internal("import report lock poisoned".to_string()))?;

        self.ledger.replace_catalog(parsed.catalog)?;
        *last_import = parsed.report.clone();

        Ok(parsed.report)
    }
}
