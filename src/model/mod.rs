//! Model Module - PM2.5 inference and risk classification

pub mod artifacts;
pub mod inference;
pub mod outcome;
pub mod provider;
pub mod threshold;

// Re-export common types
pub use artifacts::ModelArtifacts;
pub use inference::ModelError;
pub use outcome::PredictionOutcome;
pub use provider::{ModelMode, ModelProvider};
