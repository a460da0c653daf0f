//! LastActive API server.
//!
//! Endpoints:
//! - GET /                        — usage banner
//! - GET /health                  — liveness probe
//! - GET /api/address/{address}   — timestamp of the address's latest transaction

pub mod routes;
pub mod state;
