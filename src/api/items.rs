//! Catalog endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::{ImportReport, Item},
};

/// Message shown when a search finds nothing
pub const NO_RESULTS_MESSAGE: &str = "No books found.";

/// Optional cap on the number of entries returned
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    /// Return at most this many entries
    pub limit: Option<usize>,
}

/// Search query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Text to look for in titles (case-insensitive)
    pub title: Option<String>,
}

/// Search results
#[derive(Serialize, ToSchema)]
pub struct SearchResponse {
    /// Query as understood by the server (trimmed)
    pub query: String,
    /// Matching items in catalog order
    pub items: Vec<Item>,
    /// Set when a non-blank query matched nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// List catalog items with their availability
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    params(LimitQuery),
    responses(
        (status = 200, description = "Catalog items in catalog order", body = Vec<Item>)
    )
)]
pub async fn list_items(
    State(state): State<crate::AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<Item>>> {
    let items = state.services.catalog.list_items(query.limit)?;
    Ok(Json(items))
}

/// Search items by title
#[utoipa::path(
    get,
    path = "/items/search",
    tag = "items",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching items (empty for a blank query)", body = SearchResponse)
    )
)]
pub async fn search_items(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let query = query.title.unwrap_or_default().trim().to_string();
    let items = state.services.search.search(&query)?;

    let message = (!query.is_empty() && items.is_empty()).then(|| NO_RESULTS_MESSAGE.to_string());

    Ok(Json(SearchResponse {
        query,
        items,
        message,
    }))
}

/// Titles for autocomplete
#[utoipa::path(
    get,
    path = "/items/titles",
    tag = "items",
    params(LimitQuery),
    responses(
        (status = 200, description = "Catalog titles (first 500 unless a limit is given)", body = Vec<String>)
    )
)]
pub async fn list_titles(
    State(state): State<crate::AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<String>>> {
    let titles = state.services.catalog.titles(query.limit)?;
    Ok(Json(titles))
}

/// Reload the catalog from its source file
#[utoipa::path(
    post,
    path = "/catalog/reload",
    tag = "items",
    responses(
        (status = 200, description = "Catalog reloaded", body = ImportReport),
        (status = 409, description = "A title on loan is missing from the new catalog", body = crate::error::ErrorResponse),
        (status = 500, description = "Catalog file could not be read", body = crate::error::ErrorResponse)
    )
)]
pub async fn reload_catalog(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ImportReport>> {
    let report = state.services.catalog.reload().await?;
    Ok(Json(report))
}
