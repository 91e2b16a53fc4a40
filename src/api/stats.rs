//! Statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{ImportReport, LedgerStats},
};

#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    /// Circulation counters
    pub ledger: LedgerStats,
    /// Last catalog import
    pub import: ImportReport,
}

/// Get circulation and import statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<StatsResponse>> {
    Ok(Json(StatsResponse {
        ledger: state.services.loans.stats()?,
        import: state.services.catalog.import_report()?,
    }))
}
