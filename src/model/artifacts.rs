//! Model artifacts on local storage
//!
//! Two read-only files: the ONNX regressor and a JSON list of the feature
//! names it was trained on.

use std::path::{Path, PathBuf};

use super::inference::{ModelError, OnnxModel};
use crate::features::layout::validate_names;

#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub model_path: PathBuf,
    pub features_path: PathBuf,
}

impl ModelArtifacts {
    pub fn new(model_path: impl Into<PathBuf>, features_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            features_path: features_path.into(),
        }
    }

    /// Read the feature names and the model, rejecting a layout mismatch
    pub fn load(&self) -> Result<OnnxModel, ModelError> {
        let names = load_feature_names(&self.features_path)?;
        validate_names(&names).map_err(|e| ModelError::Artifact(e.to_string()))?;

        OnnxModel::load(&self.model_path)
    }
}

/// Load the JSON feature-names list
pub fn load_feature_names(path: &Path) -> Result<Vec<String>, ModelError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ModelError::Artifact(format!("Failed to read feature names {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        ModelError::Artifact(format!("Invalid feature names {}: {}", path.display(), e))
    })
}
