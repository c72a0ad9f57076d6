pub mod culture;
pub mod forecast;

pub use culture::{ActiveCulture, Culture, CultureValue, SetCultureRequest};
pub use forecast::{MAX_TEMPERATURE_C, MIN_TEMPERATURE_C, SUMMARIES, WeatherForecast};
