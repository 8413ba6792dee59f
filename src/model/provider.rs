//! Model Provider
//!
//! Decides how long a loaded model lives. `Reload` reads the artifacts
//! from disk for every prediction so a replaced model file takes effect
//! immediately; `Shared` keeps a single instance for the whole process.

use std::sync::Arc;

use super::artifacts::ModelArtifacts;
use super::inference::{Model, ModelError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelMode {
    /// Load artifacts on every prediction
    Reload,
    /// Load artifacts once at startup
    Cached,
}

impl ModelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelMode::Reload => "reload",
            ModelMode::Cached => "cached",
        }
    }
}

#[derive(Clone)]
pub enum ModelProvider {
    Reload(ModelArtifacts),
    Shared(Arc<dyn Model>),
}

impl ModelProvider {
    /// Build a provider for the configured mode. Cached mode loads the
    /// artifacts right away and fails if they are unusable.
    pub fn new(artifacts: ModelArtifacts, mode: ModelMode) -> Result<Self, ModelError> {
        match mode {
            ModelMode::Reload => Ok(ModelProvider::Reload(artifacts)),
            ModelMode::Cached => {
                let model = artifacts.load()?;
                tracing::info!("Model cached: {}", model.describe());
                Ok(Self::shared(model))
            }
        }
    }

    /// Wrap an already constructed model
    pub fn shared(model: impl Model + 'static) -> Self {
        ModelProvider::Shared(Arc::new(model))
    }

    /// Model to use for the current request
    pub fn model(&self) -> Result<Arc<dyn Model>, ModelError> {
        match self {
            ModelProvider::Reload(artifacts) => Ok(Arc::new(artifacts.load()?)),
            ModelProvider::Shared(model) => Ok(Arc::clone(model)),
        }
    }

    pub fn mode(&self) -> ModelMode {
        match self {
            ModelProvider::Reload(_) => ModelMode::Reload,
            ModelProvider::Shared(_) => ModelMode::Cached,
        }
    }
}
