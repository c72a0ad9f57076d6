use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use super::i18n::Localizer;
use crate::models::Culture;

/// API error carrying a message already localized for the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    // Validation errors 4xxx
    #[error("Unsupported culture: {requested}")]
    UnsupportedCulture { requested: String, message: String },

    // System errors 5xxx
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// Rejects `requested`, with the message in the caller's current UI culture
    pub fn unsupported_culture(
        requested: impl Into<String>,
        localizer: &Localizer,
        ui_culture: Culture,
    ) -> Self {
        Self::UnsupportedCulture {
            requested: requested.into(),
            message: localizer.translate(ui_culture, "Unsupported language"),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    pub fn error_code(&self) -> i32 {
        match self {
            Self::UnsupportedCulture { .. } => 4001,
            Self::InternalError(_) => 5001,
        }
    }

    pub fn localized_message(&self) -> String {
        match self {
            Self::UnsupportedCulture { message, .. } => message.clone(),
            Self::InternalError(msg) => msg.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: i32,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.error_code();
        let message = self.localized_message();

        let status = match code {
            4001..=4999 => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }

        (status, Json(ApiErrorResponse { code, message })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
