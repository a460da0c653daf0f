//! Address activity routes.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;

use lastactive_common::error::AppError;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/address/{address}", get(last_active))
}

/// GET /api/address/:address — Timestamp of the address's most recent transaction.
///
/// The body is pretty-printed JSON; failures are plain text.
async fn last_active(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let result = state.resolver.resolve_last_active(&address).await?;

    let body = serde_json::to_string_pretty(&result)
        .map_err(|e| AppError::Internal(format!("Error encoding response: {e}")))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
