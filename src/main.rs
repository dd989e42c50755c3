use std::sync::Arc;

use address_front::services::auth::HttpAuthBackend;
use address_front::{config, routes, state};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env();
    let auth = HttpAuthBackend::new(config.deployment.backend_base_url()).expect("http client init failed");

    tracing::info!(backend = config.deployment.backend_base_url(), "auth backend configured");

    let state = state::AppState::new(config, Arc::new(auth));
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "address-front listening");
    axum::serve(listener, app).await.expect("server failed");
}
