//! Risk tier thresholds
//!
//! Maps a PM2.5 estimate onto one of four tiers using half-open
//! intervals: [-inf, 35) Low, [35, 75) Moderate, [75, 115) High,
//! [115, inf) Emergency.

/// Lower bound of the Moderate tier (µg/m³)
pub const MODERATE_THRESHOLD: f64 = 35.0;

/// Lower bound of the High tier (µg/m³)
pub const HIGH_THRESHOLD: f64 = 75.0;

/// Lower bound of the Emergency tier (µg/m³)
pub const EMERGENCY_THRESHOLD: f64 = 115.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Emergency,
}

impl RiskTier {
    /// Classify a prediction. NaN is not below any threshold and lands in
    /// Emergency.
    pub fn classify(prediction: f64) -> Self {
        if prediction < MODERATE_THRESHOLD {
            RiskTier::Low
        } else if prediction < HIGH_THRESHOLD {
            RiskTier::Moderate
        } else if prediction < EMERGENCY_THRESHOLD {
            RiskTier::High
        } else {
            RiskTier::Emergency
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
            RiskTier::Emergency => "Emergency",
        }
    }

    /// Severity tag used by the result view for styling
    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::Low => "success",
            RiskTier::Moderate => "warning",
            RiskTier::High => "danger",
            RiskTier::Emergency => "critical",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RiskTier::Low => "Air quality is good. Enjoy your outdoor activities!",
            RiskTier::Moderate => {
                "Air quality is acceptable. However, there may be a risk for sensitive groups."
            }
            RiskTier::High => {
                "Health warnings of emergency conditions. The entire population is more likely to be affected."
            }
            RiskTier::Emergency => {
                "Health alert: everyone may experience more serious health effects."
            }
        }
    }
}
