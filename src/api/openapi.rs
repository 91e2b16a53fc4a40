//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, items, loans, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Circulation Desk API",
        version = "0.1.0",
        description = "Catalog search and lending REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Items
        items::list_items,
        items::search_items,
        items::list_titles,
        items::reload_catalog,
        // Loans
        loans::list_loans,
        loans::borrow,
        loans::return_loan,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Items
            crate::models::item::Item,
            crate::models::import_report::ImportReport,
            items::SearchResponse,
            // Loans
            crate::models::loan::LoanCode,
            crate::models::loan::LoanRecord,
            crate::models::loan::LedgerStats,
            loans::BorrowRequest,
            loans::BorrowResponse,
            loans::ReturnRequest,
            loans::ReturnResponse,
            // Stats
            stats::StatsResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "items", description = "Catalog browsing and search"),
        (name = "loans", description = "Borrowing and returning"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
