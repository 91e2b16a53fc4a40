//! Business logic services

pub mod catalog;
pub mod loans;
pub mod search;

use std::path::PathBuf;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoansService,
    pub search: search::SearchService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, catalog_source: impl Into<PathBuf>) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone(), catalog_source),
            loans: loans::LoansService::new(repository.clone()),
            search: search::SearchService::new(repository),
        }
    }
}
