//! Inference Engine - ONNX Runtime Integration
//!
//! The PM2.5 regressor is exported to ONNX and run through ONNX Runtime.
//! Anything implementing [`Model`] can stand in for it.

use std::path::{Path, PathBuf};

use ndarray::Array2;
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Tensor;
use parking_lot::Mutex;

use crate::features::{FeatureVector, FEATURE_COUNT};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Model or feature-names artifact missing or unreadable
    #[error("{0}")]
    Artifact(String),

    /// Runtime failure while evaluating the model
    #[error("{0}")]
    Inference(String),
}

// ============================================================================
// MODEL TRAIT
// ============================================================================

/// A regressor mapping one feature vector to a PM2.5 estimate
pub trait Model: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError>;

    /// Human readable identifier for logs
    fn describe(&self) -> String {
        "model".to_string()
    }
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// ONNX Runtime session. Running a session needs exclusive access.
pub struct OnnxModel {
    session: Mutex<Session>,
    path: PathBuf,
}

impl OnnxModel {
    /// Load ONNX model from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        tracing::debug!("Loading ONNX model from: {}", path.display());

        if !path.exists() {
            return Err(ModelError::Artifact(format!("Model not found: {}", path.display())));
        }

        let session = Session::builder()
            .map_err(|e| ModelError::Artifact(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Artifact(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| ModelError::Artifact(format!("Failed to load model {}: {}", path.display(), e)))?;

        Ok(Self {
            session: Mutex::new(session),
            path: path.to_path_buf(),
        })
    }
}

impl Model for OnnxModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let input_array = Array2::<f32>::from_shape_vec(
            (1, FEATURE_COUNT),
            features.to_array().to_vec(),
        ).map_err(|e| ModelError::Inference(format!("Array error: {}", e)))?;

        let input_tensor = Tensor::from_array(input_array)
            .map_err(|e| ModelError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();

        let output_name = session.outputs().first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| ModelError::Inference("No output defined".to_string()))?;

        let outputs = session.run(ort::inputs![input_tensor])
            .map_err(|e| ModelError::Inference(format!("Inference failed: {}", e)))?;

        let output = outputs.get(&output_name)
            .ok_or_else(|| ModelError::Inference("No output".to_string()))?;

        let (_, data) = output.try_extract_tensor::<f32>()
            .map_err(|e| ModelError::Inference(format!("Extract error: {}", e)))?;

        data.first()
            .map(|v| f64::from(*v))
            .ok_or_else(|| ModelError::Inference("Model returned an empty output".to_string()))
    }

    fn describe(&self) -> String {
        format!("onnx:{}", self.path.display())
    }
}
