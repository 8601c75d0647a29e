// Library root for the school website API

pub mod config;
pub mod db;
pub mod diagnostics;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{config::Config, db::DatabaseLookup};

// Re-export commonly used types
pub use error::ApiError;
pub use models::{ContactRequest, DiagnosticReport, SchoolInfo};

/// Read-only state shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
    pub database: DatabaseLookup,
}

impl AppState {
    pub fn new(config: Config, database: DatabaseLookup) -> Self {
        AppState {
            config: Arc::new(config),
            database,
        }
    }
}

/// Create the Axum router with all endpoints and middleware
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/api/hello", get(handlers::hello))
        .route("/api/info", get(handlers::info::get_school_info))
        .route("/api/contact", post(handlers::contact::submit_contact));

    if state.config.diagnostics_enabled {
        router = router.route("/test", get(handlers::diagnostics::test_database));
    }

    let request_timeout = state.config.request_timeout;

    router
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(middleware::create_middleware_stack(request_timeout))
}
