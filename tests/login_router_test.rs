//! Login route end-to-end tests.
//!
//! Drive the real axum router with `tower::ServiceExt::oneshot` and
//! hand-written service stubs, asserting the full status/body contract.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use login_service::api::{create_router, AppState};
use login_service::domain::Credentials;
use login_service::errors::{AppError, AppResult};
use login_service::services::AuthService;
use login_service::utils::EmailFormatValidator;

/// Scripted outcome for the auth service stub
enum AuthOutcome {
    Token(&'static str),
    Denied,
    Failure,
}

struct StubAuthService {
    outcome: AuthOutcome,
}

#[async_trait]
impl AuthService for StubAuthService {
    async fn authenticate(&self, _credentials: &Credentials) -> AppResult<Option<String>> {
        match &self.outcome {
            AuthOutcome::Token(token) => Ok(Some((*token).to_string())),
            AuthOutcome::Denied => Ok(None),
            AuthOutcome::Failure => Err(AppError::internal("collaborator blew up")),
        }
    }
}

struct StubEmailValidator {
    valid: bool,
}

impl EmailFormatValidator for StubEmailValidator {
    fn is_valid(&self, _email: &str) -> bool {
        self.valid
    }
}

fn make_app(outcome: AuthOutcome, email_valid: bool) -> Router {
    let state = AppState::new(
        Arc::new(StubAuthService { outcome }),
        Arc::new(StubEmailValidator { valid: email_valid }),
    );
    create_router(state)
}

async fn post_login(app: Router, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(Method::POST).uri("/api/login");
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

#[tokio::test]
async fn missing_body_returns_500_server_error() {
    let app = make_app(AuthOutcome::Token("tok123"), true);
    let (status, body) = post_login(app, None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "SERVER_ERROR");
}

#[tokio::test]
async fn missing_email_returns_400() {
    let app = make_app(AuthOutcome::Token("tok123"), true);
    let (status, body) = post_login(app, Some(json!({ "password": "any_password" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_PARAM");
    assert_eq!(body["error"]["message"], "Missing parameter: email");
}

#[tokio::test]
async fn empty_email_returns_400() {
    let app = make_app(AuthOutcome::Token("tok123"), true);
    let (status, body) =
        post_login(app, Some(json!({ "email": "", "password": "any_password" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Missing parameter: email");
}

#[tokio::test]
async fn missing_password_returns_400() {
    let app = make_app(AuthOutcome::Token("tok123"), true);
    let (status, body) =
        post_login(app, Some(json!({ "email": "any_email@gmail.com" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_PARAM");
    assert_eq!(body["error"]["message"], "Missing parameter: password");
}

#[tokio::test]
async fn malformed_email_returns_400_invalid_param() {
    let app = make_app(AuthOutcome::Token("tok123"), false);
    let (status, body) = post_login(
        app,
        Some(json!({ "email": "invalid_email", "password": "any_password" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_PARAM");
    assert_eq!(body["error"]["message"], "Invalid parameter: email");
}

#[tokio::test]
async fn invalid_credentials_return_401() {
    let app = make_app(AuthOutcome::Denied, true);
    let (status, body) = post_login(
        app,
        Some(json!({ "email": "any_email@gmail.com", "password": "any_password" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn use_case_failure_returns_500_without_leaking_details() {
    let app = make_app(AuthOutcome::Failure, true);
    let (status, body) = post_login(
        app,
        Some(json!({ "email": "any_email@gmail.com", "password": "any_password" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "SERVER_ERROR");
    assert!(!body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("collaborator blew up"));
}

#[tokio::test]
async fn successful_login_returns_200_with_access_token() {
    let app = make_app(AuthOutcome::Token("tok123"), true);
    let (status, body) = post_login(
        app,
        Some(json!({ "email": "valid_email@gmail.com", "password": "valid_password" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "accessToken": "tok123" }));
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = make_app(AuthOutcome::Denied, true);
    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
