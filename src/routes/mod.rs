//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the login proxy and liveness endpoints and applies the
//! session hook to every route. Page rendering and static assets live in
//! the UI layer, not here.

pub mod hook;
pub mod login;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/login", post(login::login))
        .route("/healthz", get(healthz))
        .layer(middleware::from_fn(hook::session_hook))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
