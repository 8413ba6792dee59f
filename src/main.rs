//! PulseGuard Server
//!
//! Web front-end for a pre-trained PM2.5 regressor.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        PULSEGUARD                          │
//! ├────────────────────────────────────────────────────────────┤
//! │  GET /          → time features → input form               │
//! │  POST /predict  → FeatureVector → Model → RiskTier → page  │
//! │                                     ▲                      │
//! │                          ┌──────────┴──────────┐           │
//! │                          │    ModelProvider    │           │
//! │                          │ (reload | cached)   │           │
//! │                          └──────────┬──────────┘           │
//! │                                     ▼                      │
//! │                     models/*.onnx + features.json          │
//! └────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod features;
mod handlers;
mod model;
mod views;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::net::SocketAddr;

use anyhow::Context;

pub use error::{AppError, AppResult};

use model::{ModelArtifacts, ModelProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    init_tracing(config.is_production());

    tracing::info!("PulseGuard starting...");
    tracing::info!(
        "Model: {} (features: {}, mode: {})",
        config.model_path.display(),
        config.features_path.display(),
        config.model_mode.as_str()
    );

    if let Some(warning) = config.missing_model_warning() {
        tracing::warn!("{}", warning);
    }

    let artifacts = ModelArtifacts::new(&config.model_path, &config.features_path);

    let models = ModelProvider::new(artifacts, config.model_mode)
        .context("Failed to load model artifacts")?;

    // Build application state
    let state = AppState {
        models,
        config: config.clone(),
    };

    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pulseguard=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub models: ModelProvider,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    // HTML pages
    let page_routes = Router::new()
        .route("/", get(handlers::home::index))
        .route("/predict", post(handlers::predict::submit));

    // JSON routes
    let api_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/predict", post(handlers::predict::predict_json))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        );

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
