use std::sync::Arc;

use chrono::{Days, Local, NaiveDate};
use rand::Rng;

use crate::models::{Culture, MAX_TEMPERATURE_C, MIN_TEMPERATURE_C, SUMMARIES, WeatherForecast};
use crate::utils::Localizer;

pub const FORECAST_DAYS: u64 = 5;

pub struct ForecastService {
    localizer: Arc<Localizer>,
}

impl ForecastService {
    pub fn new(localizer: Arc<Localizer>) -> Self {
        Self { localizer }
    }

    /// Forecast for the next days starting tomorrow, using the thread-local RNG
    pub fn forecast(&self, culture: Culture) -> Vec<WeatherForecast> {
        let today = Local::now().date_naive();
        self.forecast_from(&mut rand::rng(), today, culture)
    }

    pub fn forecast_from<R: Rng>(
        &self,
        rng: &mut R,
        today: NaiveDate,
        culture: Culture,
    ) -> Vec<WeatherForecast> {
        (1..=FORECAST_DAYS)
            .map(|offset| {
                let temperature_c = rng.random_range(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C);
                let key = SUMMARIES[rng.random_range(0..SUMMARIES.len())];
                WeatherForecast::new(
                    today + Days::new(offset),
                    temperature_c,
                    Some(self.localizer.translate(culture, key)),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forecast::to_fahrenheit;
    use rand::{SeedableRng, rngs::StdRng};

    fn service() -> ForecastService {
        ForecastService::new(Arc::new(Localizer::load().unwrap()))
    }

    #[test]
    fn test_five_consecutive_days() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let forecast = service().forecast_from(&mut rng, today, Culture::EN);

        let dates: Vec<_> = forecast.iter().map(|f| f.date.to_string()).collect();
        assert_eq!(dates, ["2024-12-31", "2025-01-01", "2025-01-02", "2025-01-03", "2025-01-04"]);
    }

    #[test]
    fn test_temperatures_in_range() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let service = service();

        for _ in 0..200 {
            for entry in service.forecast_from(&mut rng, today, Culture::EN) {
                assert!((MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&entry.temperature_c));
                assert_eq!(entry.temperature_f, to_fahrenheit(entry.temperature_c));
            }
        }
    }

    #[test]
    fn test_summaries_are_localized() {
        let localizer = Localizer::load().unwrap();
        let russian: Vec<String> =
            SUMMARIES.iter().map(|key| localizer.translate(Culture::RU, key)).collect();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let service = service();

        for _ in 0..50 {
            for entry in service.forecast_from(&mut rng, today, Culture::RU) {
                let summary = entry.summary.unwrap();
                assert!(russian.contains(&summary), "unexpected summary {}", summary);
            }
        }
    }

    #[test]
    fn test_english_summaries_are_keys() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for entry in service().forecast_from(&mut rng, today, Culture::EN) {
            assert!(SUMMARIES.contains(&entry.summary.unwrap().as_str()));
        }
    }

    #[test]
    fn test_same_seed_same_forecast() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let service = service();

        let a = service.forecast_from(&mut StdRng::seed_from_u64(9), today, Culture::TAT);
        let b = service.forecast_from(&mut StdRng::seed_from_u64(9), today, Culture::TAT);
        assert_eq!(a, b);
    }

    #[test]
    fn test_forecast_starts_tomorrow() {
        let before = Local::now().date_naive();
        let forecast = service().forecast(Culture::EN);
        let after = Local::now().date_naive();

        assert_eq!(forecast.len(), 5);
        assert!(forecast[0].date == before + Days::new(1) || forecast[0].date == after + Days::new(1));
    }
}
