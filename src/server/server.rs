use std::sync::Arc;
use std::error::Error;
use tokio::net::TcpListener;
use axum::{Router, extract::DefaultBodyLimit, routing::{get, post}};
use tracing::info;

use super::routes;
use super::state::AppState;

/// Builds the application router over shared state
pub fn build_router(state: Arc<AppState>, body_limit_bytes: usize) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health_check))
        .route("/tokenize", post(routes::tokenize))
        .route("/analyze", post(routes::analyze))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .with_state(state)
}

/// API Server for tokenization and analysis requests
pub struct ApiServer {
    state: Arc<AppState>,
    host: String,
    port: u16,
    body_limit_bytes: usize,
}

impl ApiServer {
    pub fn new(state: AppState, host: String, port: u16, body_limit_bytes: usize) -> Self {
        info!(
            "Creating new API server on {}:{} (language model available: {})",
            host,
            port,
            state.model_available()
        );
        Self {
            state: Arc::new(state),
            host,
            port,
            body_limit_bytes,
        }
    }

    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.state), self.body_limit_bytes)
    }

    pub async fn start(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = self.router();

        info!("Starting server on {}:{}", self.host, self.port);
        let listener = TcpListener::bind((self.host.as_str(), self.port)).await?;

        info!("Server started successfully");
        axum::serve(listener, app).await?;
        Ok(())
    }
}
