// ABOUTME: HTTP request handlers for signup and login information
// ABOUTME: Signup forwards to the identity provider; login happens client-side

use axum::{extract::State, http::StatusCode, response::Response, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::response::bad_request;
use super::state::AppState;

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Create an account with the identity provider
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<Value>), Response> {
    let email = request
        .email
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let password = request.password.filter(|s| !s.is_empty());

    let (email, password) = match (email, password) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(bad_request("Email and password are required")),
    };

    info!("Signup request for email: {}", email);

    let outcome = state.identity.sign_up(&email, &password).await.map_err(|e| {
        warn!("Signup rejected by identity provider: {}", e);
        bad_request(e.to_string())
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User created successfully",
            "uid": outcome.uid,
        })),
    ))
}

/// Informational only: real login happens client-side against the provider
pub async fn login_info() -> Json<Value> {
    Json(json!({
        "message": "Login is handled client-side by the identity provider"
    }))
}
