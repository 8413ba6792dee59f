//! Features Module - Model input assembly
//!
//! Canonical feature layout, the request-to-vector coercion and the
//! time-of-day deriver used for form defaults.

pub mod layout;
pub mod time;
pub mod vector;

// Re-export common types
pub use layout::{LayoutInfo, FEATURE_COUNT};
pub use time::TimeFeatures;
pub use vector::{FeatureVector, InputError};
