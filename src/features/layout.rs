//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the model input schema.**
//!
//! The regressor was trained on exactly this column order. The
//! feature-names artifact shipped next to the model is checked against
//! it before any prediction is made.
//!
//! ## Rules:
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Environmental readings (0-3) ===
    "temperature",  // 0: Air temperature (°C)
    "humidity",     // 1: Relative humidity (%)
    "pm10",         // 2: PM10 concentration (µg/m³)
    "co2",          // 3: CO2 concentration (ppm)

    // === Time of day (4-8) ===
    "hour",         // 4: Hour of day, 0-23
    "day_of_week",  // 5: Monday=0 .. Sunday=6
    "month",        // 6: 1-12
    "is_weekend",   // 7: 1 on Saturday/Sunday
    "is_rush_hour", // 8: 1 during 07-10 and 16-19
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 9;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of a feature name list, version included
pub fn hash_names<S: AsRef<str>>(version: u8, names: &[S]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[version]);

    for name in names {
        hasher.update(name.as_ref().as_bytes());
        hasher.update(&[0]);
    }

    hasher.finalize()
}

/// Hash of the canonical layout
pub fn layout_hash() -> u32 {
    hash_names(FEATURE_VERSION, FEATURE_LAYOUT)
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Layout information exposed on the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when an artifact's feature names don't match the canonical layout
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Feature layout mismatch: expected {expected:?} (hash: {expected_hash:08x}), got {actual:?} (hash: {actual_hash:08x})")]
pub struct LayoutMismatchError {
    pub expected: Vec<String>,
    pub expected_hash: u32,
    pub actual: Vec<String>,
    pub actual_hash: u32,
}

/// Validate a list of feature names against the canonical layout
pub fn validate_names<S: AsRef<str>>(names: &[S]) -> Result<(), LayoutMismatchError> {
    let expected_hash = layout_hash();
    let actual_hash = hash_names(FEATURE_VERSION, names);

    if actual_hash != expected_hash || names.len() != FEATURE_COUNT {
        return Err(LayoutMismatchError {
            expected: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            expected_hash,
            actual: names.iter().map(|s| s.as_ref().to_string()).collect(),
            actual_hash,
        });
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
