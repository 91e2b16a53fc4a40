//! Loan management endpoints

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{LoanCode, LoanRecord},
};

/// Borrow request
#[derive(Deserialize, ToSchema)]
pub struct BorrowRequest {
    /// Exact title of the item to borrow
    pub title: String,
}

/// Return request
#[derive(Deserialize, ToSchema)]
pub struct ReturnRequest {
    /// Request code issued when the item was borrowed
    pub code: String,
}

/// Borrow response with the issued request code
#[derive(Serialize, ToSchema)]
pub struct BorrowResponse {
    /// Request code to present on return
    pub code: LoanCode,
    /// Borrowed title
    pub title: String,
    pub borrowed_at: DateTime<Utc>,
    /// Status message
    pub message: String,
}

/// Return confirmation
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    /// Redeemed request code
    pub code: LoanCode,
    /// Title that is available again
    pub title: String,
    /// Status message
    pub message: String,
}

impl From<LoanRecord> for BorrowResponse {
    fn from(loan: LoanRecord) -> Self {
        Self {
            message: format!(
                "Please get your book at reception. Request number: {}",
                loan.code
            ),
            code: loan.code,
            title: loan.title,
            borrowed_at: loan.borrowed_at,
        }
    }
}

impl From<LoanRecord> for ReturnResponse {
    fn from(loan: LoanRecord) -> Self {
        Self {
            message: format!(
                "Return successful. \"{}\" has been returned. Code {} confirmed.",
                loan.title, loan.code
            ),
            code: loan.code,
            title: loan.title,
        }
    }
}

/// List outstanding loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "Outstanding loans in issue order", body = Vec<LoanRecord>)
    )
)]
pub async fn list_loans(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<LoanRecord>>> {
    let loans = state.services.loans.outstanding()?;
    Ok(Json(loans))
}

/// Borrow an item
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = BorrowRequest,
    responses(
        (status = 201, description = "Loan created", body = BorrowResponse),
        (status = 400, description = "Empty title", body = crate::error::ErrorResponse),
        (status = 404, description = "Title not in the catalog", body = crate::error::ErrorResponse),
        (status = 409, description = "Title already on loan", body = crate::error::ErrorResponse),
        (status = 503, description = "No request numbers left", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow(
    State(state): State<crate::AppState>,
    Json(request): Json<BorrowRequest>,
) -> AppResult<(StatusCode, Json<BorrowResponse>)> {
    let loan = state.services.loans.borrow(&request.title)?;
    Ok((StatusCode::CREATED, Json(loan.into())))
}

/// Return a borrowed item by request code
#[utoipa::path(
    post,
    path = "/loans/return",
    tag = "loans",
    request_body = ReturnRequest,
    responses(
        (status = 200, description = "Item returned", body = ReturnResponse),
        (status = 404, description = "Invalid request number", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    Json(request): Json<ReturnRequest>,
) -> AppResult<Json<ReturnResponse>> {
    let loan = state.services.loans.return_loan(&request.code)?;
    Ok(Json(loan.into()))
}
