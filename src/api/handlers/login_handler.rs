//! Login handler.
//!
//! Adapts the HTTP envelope to the authentication use case. The handler
//! never fails: every outcome, including collaborator errors, becomes a
//! well-defined response.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::domain::Credentials;
use crate::errors::AppError;

/// Login request body. Fields are optional so missing parameters surface
/// as 400s from the handler instead of deserialization rejections.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Create login routes
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Authenticate and return an access token.
///
/// Check order: request body, missing parameters, email format, then the
/// use case. Any error from the use case collapses to 500 and is never
/// leaked to the caller.
pub async fn login(
    State(state): State<AppState>,
    payload: Option<Json<LoginRequest>>,
) -> Response {
    let Some(Json(body)) = payload else {
        return AppError::ServerError.into_response();
    };

    let Some(email) = body.email.filter(|e| !e.is_empty()) else {
        return AppError::missing_param("email").into_response();
    };
    let Some(password) = body.password.filter(|p| !p.is_empty()) else {
        return AppError::missing_param("password").into_response();
    };

    if !state.email_validator.is_valid(&email) {
        return AppError::invalid_param("email").into_response();
    }

    let credentials = Credentials { email, password };
    match state.auth_service.authenticate(&credentials).await {
        Ok(Some(access_token)) => {
            (StatusCode::OK, Json(LoginResponse { access_token })).into_response()
        }
        Ok(None) => AppError::Unauthorized.into_response(),
        Err(e) => {
            tracing::error!("authentication failed: {:?}", e);
            AppError::ServerError.into_response()
        }
    }
}
