//! HTTP API Layer
//!
//! This crate provides the REST API for the fund rankings service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for funds and health probes
//! - **Middleware**: Request logging
//! - **DTOs**: Query strings and response envelopes
//! - **Error Handling**: Consistent `{ success: false, error, details }` responses
//!
//! Handlers reach storage only through the `FundStore` port held in
//! [`AppState`], so the router runs unchanged against PostgreSQL or an
//! in-memory store.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(Arc::new(FundRepository::new(pool)), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use domain_fund::FundStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{fund, health};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FundStore>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - Fund store backing every query
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(store: Arc<dyn FundStore>, config: ApiConfig) -> Router {
    let state = AppState { store, config };

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let fund_routes = Router::new()
        .route("/", get(fund::list_funds))
        .route("/:code", get(fund::get_fund))
        .route("/:code/display", get(fund::get_fund_display));

    let api_routes = Router::new()
        .nest("/funds", fund_routes)
        .route("/rankings", get(fund::rankings))
        .layer(axum_middleware::from_fn(request_logging_middleware));

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
