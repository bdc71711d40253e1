use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use meetfeedback::config::AppConfig;
use meetfeedback::handlers;
use meetfeedback::services::backend::script::ScriptBackend;
use meetfeedback::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    tracing::info!("using script backend at {}", config.script_url);
    let backend = ScriptBackend::new(config.script_url.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        backend: Box::new(backend),
        sessions: Mutex::new(HashMap::new()),
    });

    let app = Router::new()
        .route("/", get(handlers::form::form_page))
        .route("/health", get(handlers::health::health))
        .route("/api/form", post(handlers::form::create_form))
        .route("/api/form/:id", get(handlers::form::get_form))
        .route("/api/form/:id/email", post(handlers::form::update_email))
        .route("/api/form/:id/rating", post(handlers::form::set_rating))
        .route("/api/form/:id/comment", post(handlers::form::set_comment))
        .route("/api/form/:id/name", post(handlers::form::set_name))
        .route("/api/form/:id/submit", post(handlers::form::submit_form))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
