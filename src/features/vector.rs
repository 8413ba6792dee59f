//! Feature Vector - Core data structure for model input
//!
//! Holds the nine model inputs in named form and flattens them into
//! the order defined by `layout.rs`.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION, layout_hash};

// ============================================================================
// INPUT ERRORS
// ============================================================================

/// A request field that could not be coerced to its numeric type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("missing field '{field}'")]
    Missing { field: &'static str },

    #[error("invalid value '{value}' for field '{field}': {reason}")]
    Invalid {
        field: &'static str,
        value: String,
        reason: String,
    },
}

// ============================================================================
// FEATURE VECTOR
// ============================================================================

/// The nine model inputs. Ranges are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub temperature: f64,
    pub humidity: f64,
    pub pm10: f64,
    pub co2: f64,
    pub hour: i64,
    pub day_of_week: i64,
    pub month: i64,
    pub is_weekend: i64,
    pub is_rush_hour: i64,
}

impl FeatureVector {
    /// Coerce raw text fields into a feature vector.
    ///
    /// Fields are read in layout order, so the first bad field is the one
    /// reported.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, InputError> {
        Ok(Self {
            temperature: parse_field(fields, "temperature")?,
            humidity: parse_field(fields, "humidity")?,
            pm10: parse_field(fields, "pm10")?,
            co2: parse_field(fields, "co2")?,
            hour: parse_field(fields, "hour")?,
            day_of_week: parse_field(fields, "day_of_week")?,
            month: parse_field(fields, "month")?,
            is_weekend: parse_field(fields, "is_weekend")?,
            is_rush_hour: parse_field(fields, "is_rush_hour")?,
        })
    }

    /// Values in layout order, as fed to the model
    pub fn to_array(&self) -> [f32; FEATURE_COUNT] {
        [
            self.temperature as f32,
            self.humidity as f32,
            self.pm10 as f32,
            self.co2 as f32,
            self.hour as f32,
            self.day_of_week as f32,
            self.month as f32,
            self.is_weekend as f32,
            self.is_rush_hour as f32,
        ]
    }

    /// JSON-serializable form for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": FEATURE_VERSION,
            "layout_hash": layout_hash(),
            "named_values": FEATURE_LAYOUT.iter()
                .zip(self.to_array().iter())
                .map(|(name, value)| (name.to_string(), *value))
                .collect::<HashMap<_, _>>(),
        })
    }
}

fn parse_field<T>(fields: &HashMap<String, String>, field: &'static str) -> Result<T, InputError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = fields.get(field).ok_or(InputError::Missing { field })?;

    raw.trim().parse::<T>().map_err(|e| InputError::Invalid {
        field,
        value: raw.clone(),
        reason: e.to_string(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
