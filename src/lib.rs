//! J-Road web service
//!
//! JSON backend for the judo plan pricing simulator.

pub mod config;
pub mod error;
pub mod logging;
pub mod pricing;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::pricing::{PlanCalculator, PricingPolicy};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub calculator: PlanCalculator,
}

impl AppState {
    pub fn new(policy: PricingPolicy) -> Self {
        Self {
            calculator: PlanCalculator::new(policy),
        }
    }
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .merge(pricing::router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> AppError {
    AppError::NotFound
}
