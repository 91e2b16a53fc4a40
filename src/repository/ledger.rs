//! Lending ledger: the only mutable state in the service
//!
//! Every operation takes the ledger lock once and performs its whole
//! check-then-write under it. Loans are stored once, keyed by code; the
//! title index is only touched by `insert_loan` / `remove_loan`, so a title
//! is on loan exactly when one record references it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::{Catalog, Item, LedgerStats, LoanCode, LoanRecord},
};

use super::codes::CodeGenerator;

#[derive(Debug)]
struct LedgerState {
    catalog: Arc<Catalog>,
    /// Outstanding loans in issue order
    loans: IndexMap<LoanCode, LoanRecord>,
    /// title -> code of its outstanding loan
    on_loan: HashMap<String, LoanCode>,
    codes: CodeGenerator,
}

impl LedgerState {
    fn is_available(&self, title: &str) -> bool {
        !self.on_loan.contains_key(title)
    }

    fn insert_loan(&mut self, record: LoanRecord) {
        self.on_loan.insert(record.title.clone(), record.code.clone());
        self.loans.insert(record.code.clone(), record);
    }

    fn remove_loan(&mut self, code: &str) -> Option<LoanRecord> {
        let record = self.loans.shift_remove(code)?;
        self.on_loan.remove(&record.title);
        Some(record)
    }
}

#[derive(Debug)]
pub struct LendingLedger {
    state: Mutex<LedgerState>,
}

impl LendingLedger {
    pub fn new(catalog: Catalog, codes: CodeGenerator) -> Self {
        Self {
            state: Mutex::new(LedgerState {
                catalog: Arc::new(catalog),
                loans: IndexMap::new(),
                on_loan: HashMap::new(),
                codes,
            }),
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, LedgerState>> {
        self.state
            .lock()
            .map_err(|_| AppError::Internal("ledger lock poisoned".to_string()))
    }

    /// Borrow a title and issue its request code.
    ///
    /// Unknown titles are rejected rather than recorded, so every loan
    /// always refers to a catalog entry.
    pub fn borrow(&self, title: &str) -> AppResult<LoanRecord> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Title must not be empty".to_string()));
        }

        let mut state = self.lock()?;

        if !state.catalog.contains(title) {
            return Err(AppError::NotFound(format!("No item titled \"{}\"", title)));
        }
        if !state.is_available(title) {
            return Err(AppError::Conflict(format!("\"{}\" is not available", title)));
        }

        let record = LoanRecord {
            code: state.codes.issue()?,
            title: title.to_string(),
            borrowed_at: Utc::now(),
        };
        state.insert_loan(record.clone());

        Ok(record)
    }

    /// Return the loan identified by `code`; the title becomes available again.
    pub fn return_loan(&self, code: &str) -> AppResult<LoanRecord> {
        let code = code.trim();
        let mut state = self.lock()?;

        state
            .remove_loan(code)
            .ok_or_else(|| AppError::UnknownCode(code.to_string()))
    }

    /// Mark titles as already on loan, issuing a code for each.
    ///
    /// Titles that cannot be borrowed are skipped with a warning.
    pub fn seed_loans<I, S>(&self, titles: I) -> AppResult<Vec<LoanRecord>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seeded = Vec::new();
        for title in titles {
            match self.borrow(title.as_ref()) {
                Ok(record) => seeded.push(record),
                Err(e @ (AppError::Internal(_) | AppError::CodesExhausted(_))) => return Err(e),
                Err(e) => tracing::warn!("Skipping pre-loaned title {:?}: {}", title.as_ref(), e),
            }
        }
        Ok(seeded)
    }

    /// Every catalog item with its availability, in catalog order
    pub fn snapshot(&self) -> AppResult<Vec<Item>> {
        let state = self.lock()?;
        Ok(state
            .catalog
            .titles()
            .map(|title| Item::new(title, state.is_available(title)))
            .collect())
    }

    /// Current catalog
    pub fn catalog(&self) -> AppResult<Arc<Catalog>> {
        Ok(Arc::clone(&self.lock()?.catalog))
    }

    /// Outstanding loans in issue order
    pub fn outstanding(&self) -> AppResult<Vec<LoanRecord>> {
        Ok(self.lock()?.loans.values().cloned().collect())
    }

    pub fn stats(&self) -> AppResult<LedgerStats> {
        let state = self.lock()?;
        let total = state.catalog.len();
        let on_loan = state.loans.len();
        Ok(LedgerStats {
            total,
            available: total - on_loan,
            on_loan,
            codes_issued: state.codes.issued(),
        })
    }

    /// Swap in a freshly loaded catalog.
    ///
    /// Refused when an outstanding loan refers to a title the new catalog
    /// no longer has.
    pub fn replace_catalog(&self, catalog: Catalog) -> AppResult<()> {
        let mut state = self.lock()?;

        let orphaned = state
            .loans
            .values()
            .filter(|loan| !catalog.contains(&loan.title))
            .map(|loan| loan.title.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        if !orphaned.is_empty() {
            return Err(AppError::Conflict(format!(
                "Titles on loan are missing from the new catalog: {}",
                orphaned
            )));
        }

        state.catalog = Arc::new(catalog);
        Ok(())
    }
}
