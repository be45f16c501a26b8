// ABOUTME: Firebase Auth REST client for account creation
// ABOUTME: Forwards email/password signups and surfaces provider error messages

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::{AuthError, AuthResult};

const DEFAULT_AUTH_URL: &str = "https://identitytoolkit.googleapis.com";
const SIGN_UP_PATH: &str = "/v1/accounts:signUp";

#[derive(Debug, Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
struct SignUpResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

/// A successfully created account
#[derive(Debug, Clone)]
pub struct SignupOutcome {
    pub uid: String,
    pub email: String,
}

/// Client for the external identity provider
pub struct IdentityClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl IdentityClient {
    /// Create HTTP client with timeout configuration
    fn create_client() -> Client {
        Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client")
    }

    pub fn new(api_key: String) -> Self {
        Self {
            client: Self::create_client(),
            api_key,
            base_url: DEFAULT_AUTH_URL.to_string(),
        }
    }

    /// Points the client at a different provider URL (emulator or test fake)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Create an account with the identity provider.
    /// Provider rejections (weak password, duplicate email) come back as
    /// `AuthError::Provider` carrying the provider's message.
    pub async fn sign_up(&self, email: &str, password: &str) -> AuthResult<SignupOutcome> {
        info!("Forwarding signup to identity provider: email={}", email);

        let url = format!("{}{}?key={}", self.base_url, SIGN_UP_PATH, self.api_key);
        let response = self
            .client
            .post(&url)
            .json(&SignUpRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Identity provider rejected signup: {} - {}", status, body);

            let message = serde_json::from_str::<ProviderErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            return Err(AuthError::Provider(message));
        }

        let created: SignUpResponse = response.json().await?;
        Ok(SignupOutcome {
            uid: created.local_id,
            email: created.email,
        })
    }
}
