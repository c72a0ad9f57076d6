pub mod culture;
pub mod forecast;

pub use culture::{get_culture, set_culture};
pub use forecast::get_weather_forecast;
