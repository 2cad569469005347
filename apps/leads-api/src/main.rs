//! Lead API server for the Summit Ridge site.
//!
//! Accepts contact-form submissions, lists them for the admin view,
//! deletes them individually, and emails the office when a new lead
//! arrives. Endpoint paths match the deployed site's client contract,
//! including the POST delete verb (see DESIGN.md).

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;
mod error;
mod handlers;
mod models;
mod notify;
mod state;
mod store;
#[cfg(test)]
mod tests;

use config::Config;
use state::AppState;

/// Build the application router over the given state.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/contact", post(handlers::create_lead))
        .route("/get-all-leads", get(handlers::list_leads))
        .route("/deletecontact", post(handlers::delete_lead))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("leads_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let config = Config::from_env();

    info!("Initializing lead API...");
    let state = Arc::new(AppState::from_config(&config).await?);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting lead API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
