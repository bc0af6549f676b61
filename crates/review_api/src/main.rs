//! CodeCritic API Server
//!
//! Main binary for running the review service.
//!
//! # Environment Variables
//!
//! - `PORT`: Port to listen on (default: 3000)
//! - `HOST`: Host to bind to (default: 0.0.0.0)
//! - `GOOGLE_GEMINI_KEY`: API key for the review generator (required)
//! - `GEMINI_MODEL`: Model name (default: gemini-2.5-flash-lite)
//! - `ALLOWED_ORIGIN`: Exact CORS origin (default: any origin)
//! - `RUST_LOG`: Log level (default: info)
//!
//! Variables are also read from a `.env` file when one is present.

use std::env;

use anyhow::Context;
use gemini_client::GeminiClient;
use github_content::ContentClient;
use review_api::{ApiConfig, ApiServer, AppState, DEFAULT_PORT};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    // Load configuration from environment
    let config = ApiConfig {
        port: env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .context("Invalid PORT")?,
        host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        allowed_origin: env::var("ALLOWED_ORIGIN").ok(),
    };

    let api_key = env::var("GOOGLE_GEMINI_KEY").context("GOOGLE_GEMINI_KEY must be set")?;
    let model =
        env::var("GEMINI_MODEL").unwrap_or_else(|_| gemini_client::DEFAULT_MODEL.to_string());

    // Create service clients and app state
    let github = ContentClient::new()?;
    let gemini = GeminiClient::new(api_key, model.clone())?;
    let state = AppState::new(github, gemini);

    let server = ApiServer::new(config, state);

    tracing::info!("Starting CodeCritic API server");
    tracing::info!("Review model: {}", model);

    // Start server with graceful shutdown
    server.serve().await
}
