pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::services::{CultureService, ForecastService};
use crate::utils::Localizer;

pub struct AppState {
    pub config: Config,
    pub localizer: Arc<Localizer>,
    pub forecast_service: Arc<ForecastService>,
    pub culture_service: Arc<CultureService>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, anyhow::Error> {
        let localizer = Arc::new(Localizer::load()?);
        Ok(Self::with_localizer(config, localizer))
    }

    pub fn with_localizer(config: Config, localizer: Arc<Localizer>) -> Self {
        Self {
            config,
            forecast_service: Arc::new(ForecastService::new(Arc::clone(&localizer))),
            culture_service: Arc::new(CultureService::new(Arc::clone(&localizer))),
            localizer,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::forecast::get_weather_forecast,
        handlers::culture::set_culture,
        handlers::culture::get_culture,
    ),
    components(schemas(
        models::WeatherForecast,
        models::SetCultureRequest,
        models::Culture,
        utils::ApiErrorResponse,
    )),
    tags(
        (name = "Weather", description = "Randomized weather forecast"),
        (name = "Culture", description = "Culture selection stored in a cookie"),
    )
)]
pub struct ApiDoc;

/// Build the application router.
///
/// Swagger UI and the OpenAPI document are only mounted in development.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_docs = state.config.app.is_development();

    let app = Router::new()
        .route("/weatherforecast", get(handlers::get_weather_forecast))
        .route("/culture", get(handlers::get_culture).post(handlers::set_culture))
        .layer(axum::middleware::from_fn(middleware::locale_middleware))
        .with_state(state);

    let app = if api_docs {
        tracing::info!("API docs enabled at /swagger-ui");
        app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
    } else {
        app
    };

    app.layer(TraceLayer::new_for_http())
}
