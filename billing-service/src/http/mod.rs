//! HTTP surface: `/api/customers`, `/api/meters`, `/api/suppliers` and
//! `/api/price-per-unit`, JSON in and out.

use axum::{middleware, routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use crate::service::AppState;

pub mod customers;
pub mod error;
pub mod extract;
pub mod records;

pub use error::{ApiError, ErrorMessage};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/customers", customers::routes(state.customers))
        .nest("/api/meters", records::routes(state.meters))
        .nest("/api/suppliers", records::routes(state.suppliers))
        .nest("/api/price-per-unit", records::routes(state.prices.records().clone()))
        .layer(middleware::from_fn(error::attach_request_details))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
