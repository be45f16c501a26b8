// ABOUTME: HTTP request handlers for per-user API key storage
// ABOUTME: Upsert on save; unknown users read back as empty-string keys

use axum::{
    extract::{Query, State},
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info};

use super::response::{bad_request, internal_error};
use super::state::AppState;

#[derive(Deserialize)]
pub struct SaveApiKeysRequest {
    pub user_id: Option<String>,
    pub groq_api_key: Option<String>,
    pub phi_agno_api_key: Option<String>,
}

/// Save (upsert) a user's API keys
pub async fn save_api_keys(
    State(state): State<AppState>,
    Json(request): Json<SaveApiKeysRequest>,
) -> Result<Json<Value>, Response> {
    let (user_id, groq_api_key, phi_agno_api_key) = match (
        non_empty(request.user_id),
        non_empty(request.groq_api_key),
        non_empty(request.phi_agno_api_key),
    ) {
        (Some(user_id), Some(groq), Some(agno)) => (user_id, groq, agno),
        _ => {
            return Err(bad_request(
                "user_id, groq_api_key and phi_agno_api_key are required",
            ))
        }
    };

    info!("Saving API keys for user: {}", user_id);

    state
        .api_key_storage
        .save_keys(&user_id, &groq_api_key, &phi_agno_api_key)
        .await
        .map_err(|e| {
            error!("Failed to save API keys: {}", e);
            internal_error(e.to_string())
        })?;

    Ok(Json(json!({ "message": "API keys saved successfully" })))
}

#[derive(Deserialize)]
pub struct ProfileQuery {
    pub user_id: Option<String>,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub groq_api_key: String,
    pub phi_agno_api_key: String,
}

/// Read a user's stored API keys; unknown users get empty strings, not an error
pub async fn get_profile(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ProfileResponse>, Response> {
    let user_id = non_empty(query.user_id).ok_or_else(|| bad_request("user_id is required"))?;

    info!("Fetching profile for user: {}", user_id);

    let keys = state.api_key_storage.get_keys(&user_id).await.map_err(|e| {
        error!("Failed to fetch API keys: {}", e);
        internal_error(e.to_string())
    })?;

    let (groq_api_key, phi_agno_api_key) = keys
        .map(|k| {
            (
                k.groq_api_key.unwrap_or_default(),
                k.phi_agno_api_key.unwrap_or_default(),
            )
        })
        .unwrap_or_default();

    Ok(Json(ProfileResponse {
        groq_api_key,
        phi_agno_api_key,
    }))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
