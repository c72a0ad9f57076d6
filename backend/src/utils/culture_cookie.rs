//! Culture cookie encoding
//!
//! The cookie value is `c=<culture>|uic=<ui culture>`, percent-encoded on the wire.

use axum::http::{HeaderMap, header::COOKIE};

use crate::models::{ActiveCulture, Culture};

pub const CULTURE_COOKIE_NAME: &str = ".AspNetCore.Culture";

const CULTURE_PREFIX: &str = "c=";
const UI_CULTURE_PREFIX: &str = "uic=";
const SEPARATOR: char = '|';

/// Build the (unencoded) cookie value for `culture`
pub fn make_cookie_value(culture: Culture) -> String {
    format!("{}{}{}{}{}", CULTURE_PREFIX, culture, SEPARATOR, UI_CULTURE_PREFIX, culture)
}

/// Build a complete `Set-Cookie` header value for `culture`
pub fn make_set_cookie(culture: Culture) -> String {
    format!(
        "{}={}; Path=/",
        CULTURE_COOKIE_NAME,
        urlencoding::encode(&make_cookie_value(culture))
    )
}

/// Parse a cookie value, encoded or not.
///
/// Returns `None` when the value names no supported culture at all. When only one of
/// the two parts is usable, it is used for both; an unsupported part falls back to
/// the default culture on its own.
pub fn parse_cookie_value(value: &str) -> Option<ActiveCulture> {
    let decoded = urlencoding::decode(value).ok();
    let value = decoded.as_deref().unwrap_or(value);

    let mut culture_name = None;
    let mut ui_culture_name = None;
    for part in value.split(SEPARATOR).map(str::trim).filter(|p| !p.is_empty()) {
        if let Some(name) = part.strip_prefix(UI_CULTURE_PREFIX) {
            ui_culture_name = Some(name).filter(|n| !n.is_empty());
        } else if let Some(name) = part.strip_prefix(CULTURE_PREFIX) {
            culture_name = Some(name).filter(|n| !n.is_empty());
        }
    }

    let (culture_name, ui_culture_name) = match (culture_name, ui_culture_name) {
        (None, None) => return None,
        (Some(c), None) => (c, c),
        (None, Some(uic)) => (uic, uic),
        (Some(c), Some(uic)) => (c, uic),
    };

    let culture = Culture::parse(culture_name);
    let ui_culture = Culture::parse(ui_culture_name);
    if culture.is_none() && ui_culture.is_none() {
        return None;
    }

    Some(ActiveCulture {
        culture: culture.unwrap_or_default(),
        ui_culture: ui_culture.unwrap_or_default(),
    })
}

/// Find the raw culture cookie value among the request's `Cookie` headers
pub fn find_culture_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| match v.to_str() {
            Ok(s) => Some(s),
            Err(_) => {
                tracing::warn!("Could not parse cookie header as string");
                None
            },
        })
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == CULTURE_COOKIE_NAME)
        .map(|(_, value)| value.trim_matches('"'))
}
