//! Request code generation

use crate::{error::{AppError, AppResult}, models::LoanCode};

/// Monotonic counter rendered as a zero-padded decimal code.
///
/// Codes widen past `width` digits once the counter outgrows it
/// (`"999"` is followed by `"1000"`). Nothing is issued beyond `max`.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    next: u64,
    width: usize,
    max: u32,
}

impl CodeGenerator {
    pub fn new(width: usize, max: Option<u32>) -> Self {
        Self {
            next: 1,
            width,
            max: max.unwrap_or(u32::MAX),
        }
    }

    /// Issue the next code and advance the counter.
    pub fn issue(&mut self) -> AppResult<LoanCode> {
        if self.next > u64::from(self.max) {
            return Err(AppError::CodesExhausted(self.max));
        }
        let code = format!("{:0width$}", self.next, width = self.width);
        self.next += 1;
        Ok(LoanCode::from(code))
    }

    /// Number of codes issued so far
    pub fn issued(&self) -> u32 {
        // next never exceeds max + 1, so this fits in u32
        (self.next - 1) as u32
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(3, None)
    }
}
