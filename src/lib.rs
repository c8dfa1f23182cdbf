//! Library ledger
//!
//! Keeps the catalog of books and members, runs the borrowing lifecycle
//! (borrow, return, overdue) and builds the read-only reports a front end
//! needs. Rendering and routing live outside this crate.

use std::sync::Arc;

use chrono::NaiveDate;

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod seed;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state handed to the presentation layer
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the stores and services, loading demo data if configured
    pub fn new(config: AppConfig, today: NaiveDate) -> AppResult<Self> {
        let mut repository = repository::Repository::new();
        if config.library.seed_demo_data {
            seed::load_demo_data(&mut repository, today)?;
        }
        let services = services::Services::new(repository, &config.library)?;

        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services),
        })
    }

    /// Same as [`AppState::new`] with configuration read from files and environment
    pub fn from_env(today: NaiveDate) -> AppResult<Self> {
        Self::new(AppConfig::load()?, today)
    }
}
