//! HTML views
//!
//! Two pages: the input form and the prediction result. Only numbers and
//! fixed tier strings are interpolated, so no escaping is needed.

use crate::features::TimeFeatures;
use crate::model::PredictionOutcome;

/// Environmental values the form starts with
pub const DEFAULT_TEMPERATURE: f64 = 28.5;
pub const DEFAULT_HUMIDITY: f64 = 45.0;
pub const DEFAULT_PM10: f64 = 120.0;
pub const DEFAULT_CO2: f64 = 450.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FormDefaults {
    pub temperature: f64,
    pub humidity: f64,
    pub pm10: f64,
    pub co2: f64,
    pub time: TimeFeatures,
}

impl FormDefaults {
    pub fn at(time: TimeFeatures) -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            humidity: DEFAULT_HUMIDITY,
            pm10: DEFAULT_PM10,
            co2: DEFAULT_CO2,
            time,
        }
    }
}

const STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:2rem auto}\
label{display:block;margin-top:.6rem}\
.success{color:#1e7e34}.warning{color:#b58100}.danger{color:#c82333}.critical{color:#6f0000;font-weight:bold}";

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

fn number_input(name: &str, label: &str, value: impl std::fmt::Display, step: &str) -> String {
    format!(
        "<label for=\"{name}\">{label}</label>\
         <input type=\"number\" step=\"{step}\" id=\"{name}\" name=\"{name}\" value=\"{value}\" required>\n"
    )
}

fn flag_select(name: &str, label: &str, value: u8) -> String {
    let selected = |v: u8| if v == value { " selected" } else { "" };
    format!(
        "<label for=\"{name}\">{label}</label>\
         <select id=\"{name}\" name=\"{name}\">\
         <option value=\"0\"{}>No</option><option value=\"1\"{}>Yes</option></select>\n",
        selected(0),
        selected(1),
    )
}

/// The input form
pub fn render_index(defaults: &FormDefaults) -> String {
    let time = &defaults.time;
    let mut form = String::from("<h1>PulseGuard</h1>\n<p>Predict PM2.5 from current sensor readings.</p>\n");
    form.push_str("<form action=\"/predict\" method=\"post\">\n");
    form.push_str(&number_input("temperature", "Temperature (°C)", defaults.temperature, "any"));
    form.push_str(&number_input("humidity", "Humidity (%)", defaults.humidity, "any"));
    form.push_str(&number_input("pm10", "PM10 (µg/m³)", defaults.pm10, "any"));
    form.push_str(&number_input("co2", "CO2 (ppm)", defaults.co2, "any"));
    form.push_str(&number_input("hour", "Hour (0-23)", time.hour, "1"));
    form.push_str(&number_input("day_of_week", "Day of week (Monday=0)", time.day_of_week, "1"));
    form.push_str(&number_input("month", "Month (1-12)", time.month, "1"));
    form.push_str(&flag_select("is_weekend", "Weekend", time.is_weekend));
    form.push_str(&flag_select("is_rush_hour", "Rush hour", time.is_rush_hour));
    form.push_str("<p><button type=\"submit\">Predict</button></p>\n</form>");

    page("PulseGuard", &form)
}

/// The prediction result
pub fn render_result(outcome: &PredictionOutcome) -> String {
    let body = format!(
        "<h1>PulseGuard Prediction</h1>\n\
         <p>Predicted PM2.5: <strong>{pm2_5:.2} µg/m³</strong></p>\n\
         <p class=\"{color}\">Risk level: <strong>{level}</strong></p>\n\
         <p class=\"{color}\">{message}</p>\n\
         <h2>Inputs</h2>\n<ul>\n\
         <li>Temperature: {temperature:?} °C</li>\n\
         <li>Humidity: {humidity:?} %</li>\n\
         <li>PM10: {pm10:?} µg/m³</li>\n\
         <li>CO2: {co2:?} ppm</li>\n</ul>\n\
         <p><a href=\"/\">New prediction</a></p>",
        pm2_5 = outcome.pm2_5,
        color = outcome.risk_color,
        level = outcome.risk_level,
        message = outcome.risk_message,
        temperature = outcome.temperature,
        humidity = outcome.humidity,
        pm10 = outcome.pm10,
        co2 = outcome.co2,
    );

    page("PulseGuard - Result", &body)
}
