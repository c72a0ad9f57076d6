use std::sync::Arc;

use crate::models::{ActiveCulture, Culture, CultureValue};
use crate::utils::{ApiError, ApiResult, Localizer, make_set_cookie};

/// A validated culture switch, ready to be sent back to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CultureSelection {
    pub culture: Culture,
    pub set_cookie: String,
}

pub struct CultureService {
    localizer: Arc<Localizer>,
}

impl CultureService {
    pub fn new(localizer: Arc<Localizer>) -> Self {
        Self { localizer }
    }

    /// Validate the requested culture and build the cookie that selects it.
    ///
    /// Rejections are worded in `current`, the culture in effect before the switch.
    pub fn select(
        &self,
        requested: &CultureValue,
        current: ActiveCulture,
    ) -> ApiResult<CultureSelection> {
        let culture = requested.resolve().ok_or_else(|| {
            tracing::warn!("Rejected unsupported culture: {}", requested);
            ApiError::unsupported_culture(requested.to_string(), &self.localizer, current.ui_culture)
        })?;

        Ok(CultureSelection { culture, set_cookie: make_set_cookie(culture) })
    }

    pub fn internal_error(&self, current: ActiveCulture) -> ApiError {
        ApiError::internal_error(self.localizer.translate(current.ui_culture, "Internal server error"))
    }
}
