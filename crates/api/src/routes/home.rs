use axum::Router;
use axum::routing::get;

use crate::state::AppState;

const USAGE: &str = "Hello! This is the home page.
To get the last active timestamp for an address, make a GET request to /api/address/{address}
Example: /api/address/1BoatSLRHtKNngkdXEeobR76b53LETtpyT";

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}

async fn home() -> &'static str {
    USAGE
}
