//! Health check endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Liveness only; the explorer itself is not contacted.
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "lastactive-api",
        "version": env!("CARGO_PKG_VERSION"),
        "explorer": state.resolver.explorer().base_url(),
        "timestamp_zone": state.config.timestamp_zone.to_string(),
    }))
}
