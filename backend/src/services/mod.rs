pub mod culture_service;
pub mod forecast_service;

pub use culture_service::{CultureSelection, CultureService};
pub use forecast_service::ForecastService;
