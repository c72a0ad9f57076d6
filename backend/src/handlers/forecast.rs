use std::sync::Arc;

use axum::{Json, extract::State};

use crate::AppState;
use crate::models::{ActiveCulture, WeatherForecast};
use crate::utils::ApiResult;

/// Five-day forecast with summaries in the active culture
#[utoipa::path(
    get,
    path = "/weatherforecast",
    operation_id = "GetWeatherForecast",
    responses(
        (status = 200, description = "Forecast for the next five days", body = Vec<WeatherForecast>)
    ),
    tag = "Weather"
)]
pub async fn get_weather_forecast(
    State(state): State<Arc<AppState>>,
    active: ActiveCulture,
) -> ApiResult<Json<Vec<WeatherForecast>>> {
    let forecast = state.forecast_service.forecast(active.ui_culture);
    tracing::debug!("Generated {} forecast entries in {}", forecast.len(), active.ui_culture);
    Ok(Json(forecast))
}
