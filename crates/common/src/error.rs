use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failure of a single call to the block explorer.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The explorer answered with anything other than 200.
    #[error("unexpected status code: {0}")]
    Status(u16),

    /// The body was not valid JSON.
    #[error("error parsing JSON response: {0}")]
    Parse(String),

    /// The body was valid JSON but not the expected shape.
    #[error("unexpected response shape: {0}")]
    Shape(String),

    /// Connection, DNS, timeout or body read failure.
    #[error("error sending request: {0}")]
    Transport(String),
}

/// Request-level errors surfaced by the API.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error getting txids for address {address}: {source}")]
    AddressLookup {
        address: String,
        #[source]
        source: UpstreamError,
    },

    #[error("Error getting transaction timestamp for {txid}: {source}")]
    TransactionLookup {
        txid: String,
        #[source]
        source: UpstreamError,
    },

    #[error("No transactions found for address: {0}")]
    NoTransactions(String),

    #[error("Timed out resolving last activity for address: {0}")]
    Timeout(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NoTransactions(_) => StatusCode::NOT_FOUND,
            AppError::AddressLookup { .. }
            | AppError::TransactionLookup { .. }
            | AppError::Timeout(_)
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
