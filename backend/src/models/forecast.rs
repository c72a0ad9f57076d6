use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

pub const MIN_TEMPERATURE_C: i32 = -20;
pub const MAX_TEMPERATURE_C: i32 = 54;

/// Summary keys; the localized text is looked up per culture
pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: Option<String>,
}

impl WeatherForecast {
    pub fn new(date: NaiveDate, temperature_c: i32, summary: Option<String>) -> Self {
        Self { date, temperature_c, temperature_f: to_fahrenheit(temperature_c), summary }
    }
}

/// `32 + C / 0.5556`, truncated toward zero
pub fn to_fahrenheit(temperature_c: i32) -> i32 {
    32 + (f64::from(temperature_c) / 0.5556) as i32
}
