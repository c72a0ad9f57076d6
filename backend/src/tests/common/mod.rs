// Common test utilities and helpers

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::config::{Config, Environment};
use crate::{AppState, build_router};

pub fn create_test_state(environment: Environment) -> Arc<AppState> {
    let mut config = Config::default();
    config.app.environment = environment;
    Arc::new(AppState::new(config).expect("Failed to create app state"))
}

pub fn create_test_app() -> Router {
    build_router(create_test_state(Environment::Production))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Response body is not the expected JSON")
    }

    /// Value of the `Set-Cookie` header, if any
    pub fn set_cookie(&self) -> Option<String> {
        self.headers
            .get(header::SET_COOKIE)
            .map(|v| v.to_str().expect("Set-Cookie is not ASCII").to_string())
    }

    /// The `name=value` pair to send back in a `Cookie` header
    pub fn cookie_pair(&self) -> Option<String> {
        self.set_cookie()
            .and_then(|c| c.split(';').next().map(|pair| pair.trim().to_string()))
    }
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Request failed");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec();

    TestResponse { status, headers, body }
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    send(app, Method::GET, uri, cookie, None).await
}

pub async fn post_json(app: &Router, uri: &str, cookie: Option<&str>, body: &str) -> TestResponse {
    send(app, Method::POST, uri, cookie, Some(body)).await
}
