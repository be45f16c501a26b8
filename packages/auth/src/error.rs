// ABOUTME: Error types for identity provider operations
// ABOUTME: Provider-reported failures carry the provider's own message

use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0}")]
    Provider(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
