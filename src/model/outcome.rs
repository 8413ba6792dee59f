//! Prediction outcome shown to the user

use serde::Serialize;

use super::threshold::RiskTier;
use crate::features::FeatureVector;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionOutcome {
    pub pm2_5: f64,
    pub risk_level: &'static str,
    pub risk_color: &'static str,
    pub risk_message: &'static str,
    pub temperature: f64,
    pub humidity: f64,
    pub pm10: f64,
    pub co2: f64,
}

impl PredictionOutcome {
    /// Classify the raw prediction and echo the environmental inputs
    pub fn new(prediction: f64, features: &FeatureVector) -> Self {
        let tier = RiskTier::classify(prediction);

        Self {
            pm2_5: round2(prediction),
            risk_level: tier.label(),
            risk_color: tier.color(),
            risk_message: tier.message(),
            temperature: features.temperature,
            humidity: features.humidity,
            pm10: features.pm10,
            co2: features.co2,
        }
    }
}

/// Round to two decimal places, ties to even
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features() -> FeatureVector {
        FeatureVector {
            temperature: 28.5,
            humidity: 45.0,
            pm10: 120.0,
            co2: 450.0,
            hour: 8,
            day_of_week: 1,
            month: 6,
            is_weekend: 0,
            is_rush_hour: 1,
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(42.567), 42.57);
        assert_eq!(round2(50.0), 50.0);
        assert_eq!(round2(34.994), 34.99);
    }

    #[test]
    fn test_round2_ties_to_even() {
        // f32 model outputs widen to exact binary ties
        assert_eq!(round2(f64::from(42.125f32)), 42.12);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
    }

    #[test]
    fn test_outcome_moderate() {
        let outcome = PredictionOutcome::new(50.0, &features());

        assert_eq!(outcome.pm2_5, 50.0);
        assert_eq!(outcome.risk_level, "Moderate");
        assert_eq!(outcome.risk_color, "warning");
        assert_eq!(outcome.temperature, 28.5);
        assert_eq!(outcome.co2, 450.0);
    }

    #[test]
    fn test_tier_uses_unrounded_value() {
        // 34.996 rounds to 35.0 for display but is still below the threshold
        let outcome = PredictionOutcome::new(34.996, &features());
        assert_eq!(outcome.pm2_5, 35.0);
        assert_eq!(outcome.risk_level, "Low");
    }
}
