//! Configuration module

use std::env;
use std::path::PathBuf;

use crate::model::ModelMode;

/// Default model artifact
pub const DEFAULT_MODEL_PATH: &str = "models/pulseguard_model.onnx";

/// Default feature-names artifact
pub const DEFAULT_FEATURES_PATH: &str = "models/pulseguard_features.json";

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Serialized ONNX regressor
    pub model_path: PathBuf,

    /// JSON list of feature names the model was trained on
    pub features_path: PathBuf,

    /// Reload the model per request, or cache it at startup
    pub model_mode: ModelMode,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),

            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH)),

            features_path: env::var("FEATURES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_FEATURES_PATH)),

            model_mode: env::var("MODEL_CACHE")
                .map(|s| parse_model_mode(&s))
                .unwrap_or(ModelMode::Reload),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Startup notice for a model file that is not there yet. Only
    /// meaningful in reload mode; cached mode fails outright instead.
    pub fn missing_model_warning(&self) -> Option<String> {
        if self.model_mode == ModelMode::Reload && !self.model_path.exists() {
            Some(format!("Model artifact not found yet: {}", self.model_path.display()))
        } else {
            None
        }
    }
}

fn parse_model_mode(value: &str) -> ModelMode {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => ModelMode::Cached,
        _ => ModelMode::Reload,
    }
}
