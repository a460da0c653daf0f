//! Shared application state for the Axum API server.

use lastactive_common::config::AppConfig;
use lastactive_common::error::AppError;
use lastactive_explorer::AddressActivityResolver;

/// Application state shared across all route handlers via Axum `State`.
///
/// Holds no mutable data; cloning shares the explorer connection pool.
#[derive(Clone)]
pub struct AppState {
    pub resolver: AddressActivityResolver,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(resolver: AddressActivityResolver, config: AppConfig) -> Self {
        Self { resolver, config }
    }

    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let resolver = AddressActivityResolver::from_config(&config)?;
        Ok(Self::new(resolver, config))
    }
}
