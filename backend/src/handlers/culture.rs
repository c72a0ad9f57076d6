use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, header::SET_COOKIE},
};

use crate::AppState;
use crate::models::{ActiveCulture, SetCultureRequest};
use crate::utils::{ApiErrorResponse, ApiResult};

/// Switch the culture for subsequent requests
#[utoipa::path(
    post,
    path = "/culture",
    operation_id = "SetCulture",
    request_body = SetCultureRequest,
    responses(
        (status = 200, description = "Display name of the selected culture; sets the culture cookie", body = String),
        (status = 400, description = "Unsupported culture", body = ApiErrorResponse)
    ),
    tag = "Culture"
)]
pub async fn set_culture(
    State(state): State<Arc<AppState>>,
    current: ActiveCulture,
    Json(req): Json<SetCultureRequest>,
) -> ApiResult<(HeaderMap, Json<String>)> {
    tracing::debug!("Culture change request: {} (current {})", req.culture, current.culture);

    let selection = state.culture_service.select(&req.culture, current)?;

    let cookie = HeaderValue::from_str(&selection.set_cookie).map_err(|err| {
        tracing::error!("Invalid culture cookie {:?}: {}", selection.set_cookie, err);
        state.culture_service.internal_error(current)
    })?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);

    tracing::info!("Culture changed: {} -> {}", current.culture, selection.culture);
    Ok((headers, Json(selection.culture.display_name().to_string())))
}

/// Display name of the culture in effect for this request
#[utoipa::path(
    get,
    path = "/culture",
    operation_id = "GetCulture",
    responses(
        (status = 200, description = "Display name of the active culture", body = String)
    ),
    tag = "Culture"
)]
pub async fn get_culture(active: ActiveCulture) -> ApiResult<Json<String>> {
    Ok(Json(active.culture.display_name().to_string()))
}
