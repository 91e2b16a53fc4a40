//! Loan management service

use crate::{
    error::{AppError, AppResult},
    models::{LedgerStats, LoanRecord},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow a title and get its request code
    pub fn borrow(&self, title: &str) -> AppResult<LoanRecord> {
        match self.repository.ledger.borrow(title) {
            Ok(loan) => {
                tracing::info!("Issued request {} for \"{}\"", loan.code, loan.title);
                Ok(loan)
            }
            Err(e) => {
                tracing::debug!("Borrow of {:?} refused: {}", title, e);
                Err(e)
            }
        }
    }

    /// Return a borrowed item using its request code
    pub fn return_loan(&self, code: &str) -> AppResult<LoanRecord> {
        match self.repository.ledger.return_loan(code) {
            Ok(loan) => {
                tracing::info!("Request {} returned: \"{}\"", loan.code, loan.title);
                Ok(loan)
            }
            Err(e @ AppError::UnknownCode(_)) => {
                tracing::debug!("Return with unknown code {:?}", code);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Outstanding loans in issue order
    pub fn outstanding(&self) -> AppResult<Vec<LoanRecord>> {
        self.repository.ledger.outstanding()
    }

    pub fn stats(&self) -> AppResult<LedgerStats> {
        self.repository.ledger.stats()
    }
}
