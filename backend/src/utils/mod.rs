pub mod culture_cookie;
pub mod error;
pub mod i18n;

pub use culture_cookie::{
    CULTURE_COOKIE_NAME, find_culture_cookie, make_cookie_value, make_set_cookie,
    parse_cookie_value,
};
pub use error::{ApiError, ApiErrorResponse, ApiResult};
pub use i18n::Localizer;
