//! Time Feature Derivation
//!
//! Calendar features derived from the current wall-clock moment. Only
//! used to pre-fill the form; the user may override every value.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

/// Morning rush window, inclusive
pub const MORNING_RUSH: (u32, u32) = (7, 10);

/// Evening rush window, inclusive
pub const EVENING_RUSH: (u32, u32) = (16, 19);

/// First weekend day under the Monday=0 convention
pub const WEEKEND_START: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFeatures {
    pub hour: u32,
    pub day_of_week: u32,
    pub month: u32,
    pub is_weekend: u8,
    pub is_rush_hour: u8,
}

impl TimeFeatures {
    /// Derive features from any time-zone aware moment
    pub fn from_datetime<Tz: TimeZone>(moment: &DateTime<Tz>) -> Self {
        let hour = moment.hour();
        let day_of_week = moment.weekday().num_days_from_monday();

        Self {
            hour,
            day_of_week,
            month: moment.month(),
            is_weekend: is_weekend(day_of_week) as u8,
            is_rush_hour: is_rush_hour(hour) as u8,
        }
    }

    /// Features for the server's local clock
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }
}

pub fn is_rush_hour(hour: u32) -> bool {
    (MORNING_RUSH.0..=MORNING_RUSH.1).contains(&hour)
        || (EVENING_RUSH.0..=EVENING_RUSH.1).contains(&hour)
}

pub fn is_weekend(day_of_week: u32) -> bool {
    day_of_week >= WEEKEND_START
}
