//! Business logic services

pub mod borrowings;
pub mod catalog;
pub mod members;
pub mod reports;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::LibraryConfig,
    error::{AppError, AppResult},
    repository::Repository,
};

/// One lock over every store: writers run one at a time, which serializes
/// borrow and return for every book.
pub type SharedRepository = Arc<RwLock<Repository>>;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub members: members::MembersService,
    pub borrowings: borrowings::BorrowingsService,
    pub reports: reports::ReportsService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository, config: &LibraryConfig) -> AppResult<Self> {
        let loan_days = u64::try_from(config.default_loan_days)
            .ok()
            .filter(|days| *days > 0)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "library.default_loan_days must be at least 1, got {}",
                    config.default_loan_days
                ))
            })?;

        let shared: SharedRepository = Arc::new(RwLock::new(repository));
        Ok(Self {
            catalog: catalog::CatalogService::new(shared.clone()),
            members: members::MembersService::new(shared.clone()),
            borrowings: borrowings::BorrowingsService::new(shared.clone(), loan_days),
            reports: reports::ReportsService::new(shared),
        })
    }
}
