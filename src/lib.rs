pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use services::pagination::PageNumberPagination;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub pagination: PageNumberPagination,
}

impl AppState {
    pub fn new(config: config::AppConfig) -> Self {
        let pagination = PageNumberPagination::from_config(&config.pagination);
        Self { config, pagination }
    }
}
