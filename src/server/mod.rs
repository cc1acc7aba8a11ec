// Bill stance HTTP API

mod handlers;
mod types;

pub use handlers::ApiError;
pub use types::{
    BillStanceResponse, BillSummaryResponse, ErrorResponse, FetchBillRequest, PlaceholderStance,
    StanceScores,
};

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::congress::CongressClient;
use crate::gemini::GeminiClient;
use crate::model::StancePipeline;
use crate::training::CONGRESS_SESSION;

/// Configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000")
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: crate::config::DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

/// Shared application state. The pipeline is loaded once at startup and
/// consumed read-only; nothing else is shared across requests.
pub struct AppState {
    pub congress: CongressClient,
    pub gemini: GeminiClient,
    pub pipeline: Arc<StancePipeline>,
    /// Congress session used by the GET route
    pub congress_session: u32,
}

impl AppState {
    pub fn new(congress: CongressClient, gemini: GeminiClient, pipeline: Arc<StancePipeline>) -> Self {
        Self {
            congress,
            gemini,
            pipeline,
            congress_session: CONGRESS_SESSION,
        }
    }
}

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/bill/:bill_number", get(handlers::get_bill))
        .route("/fetch-bill", post(handlers::fetch_bill))
        .with_state(state)
}

/// Start the HTTP server
pub async fn serve(state: AppState, config: ServerConfig) -> Result<()> {
    let addr: SocketAddr = config.bind_address.parse()?;

    let app = create_router(Arc::new(state))
        .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024)) // 1MB
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting billstance server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1:8000");
    }
}
