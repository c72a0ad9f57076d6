//! Culture resolution middleware
//!
//! Resolves the active culture from the culture cookie, falling back to the
//! default culture, and stores it in the request extensions.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::models::ActiveCulture;
use crate::utils::{find_culture_cookie, parse_cookie_value};

/// Resolve the culture for a request from its headers. Never fails.
pub fn resolve_culture(headers: &HeaderMap) -> ActiveCulture {
    let Some(raw) = find_culture_cookie(headers) else {
        return ActiveCulture::default();
    };

    match parse_cookie_value(raw) {
        Some(active) => active,
        None => {
            tracing::debug!("Ignoring unsupported culture cookie: {:?}", raw);
            ActiveCulture::default()
        },
    }
}

/// Middleware to resolve the culture before handlers run
pub async fn locale_middleware(mut req: Request, next: Next) -> Response {
    let active = resolve_culture(req.headers());
    tracing::debug!(
        "Resolved culture={} ui_culture={} for {} {}",
        active.culture,
        active.ui_culture,
        req.method(),
        req.uri().path()
    );

    req.extensions_mut().insert(active);
    next.run(req).await
}

#[async_trait]
impl<S> FromRequestParts<S> for ActiveCulture
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Routes mounted without the middleware resolve on the spot
        Ok(parts
            .extensions
            .get::<ActiveCulture>()
            .copied()
            .unwrap_or_else(|| resolve_culture(&parts.headers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Culture;
    use axum::http::{HeaderValue, header::COOKIE};

    fn headers_with_cookie(cookie: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static(cookie));
        headers
    }

    #[test]
    fn test_default_without_cookie() {
        assert_eq!(resolve_culture(&HeaderMap::new()), ActiveCulture::new(Culture::EN));
    }

    #[test]
    fn test_cookie_wins() {
        let headers = headers_with_cookie(".AspNetCore.Culture=c%3DTAT%7Cuic%3DTAT");
        assert_eq!(resolve_culture(&headers), ActiveCulture::new(Culture::TAT));
    }

    #[test]
    fn test_unsupported_cookie_fails_closed() {
        let headers = headers_with_cookie(".AspNetCore.Culture=c%3DFR%7Cuic%3DFR");
        assert_eq!(resolve_culture(&headers), ActiveCulture::new(Culture::EN));

        let headers = headers_with_cookie(".AspNetCore.Culture=not-a-culture");
        assert_eq!(resolve_culture(&headers), ActiveCulture::new(Culture::EN));
    }

    #[test]
    fn test_other_cookies_ignored() {
        let headers = headers_with_cookie("Culture=c%3DRU%7Cuic%3DRU; lang=RU");
        assert_eq!(resolve_culture(&headers), ActiveCulture::new(Culture::EN));
    }
}
