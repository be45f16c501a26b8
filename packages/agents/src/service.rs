// ABOUTME: Groq chat-completions client used by the research and content agents
// ABOUTME: Handles API requests, response extraction, and error mapping

use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1";
const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
const DEFAULT_MODEL: &str = "deepseek-r1-distill-llama-70b";
const DEFAULT_MAX_TOKENS: u32 = 4096;
const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("No API key configured")]
    NoApiKey,

    #[error("Model returned an empty reply")]
    EmptyReply,
}

pub type AgentResult<T> = Result<T, AgentError>;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl Usage {
    pub fn total_tokens(&self) -> u32 {
        self.prompt_tokens + self.completion_tokens
    }
}

#[derive(Debug)]
pub struct AgentReply {
    pub text: String,
    pub usage: Usage,
}

/// Client for the Groq OpenAI-compatible chat-completions API
pub struct GroqService {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GroqService {
    /// Create HTTP client with timeout configuration
    fn create_client() -> Client {
        Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client")
    }

    /// Creates a new service instance
    /// API key is fetched from GROQ_API_KEY environment variable
    /// Model can be overridden with GROQ_MODEL environment variable
    pub fn new() -> Self {
        let api_key = env::var("GROQ_API_KEY").ok();
        if api_key.is_none() {
            info!("GROQ_API_KEY not set - agent calls will fail until a key is provided");
        }

        let model = env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        if model != DEFAULT_MODEL {
            info!("Using custom Groq model: {}", model);
        }

        Self {
            client: Self::create_client(),
            api_key,
            base_url: GROQ_API_URL.to_string(),
            model,
        }
    }

    /// Creates a new service instance with a specific API key
    pub fn with_api_key(api_key: String) -> Self {
        let model = env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            client: Self::create_client(),
            api_key: Some(api_key),
            base_url: GROQ_API_URL.to_string(),
            model,
        }
    }

    /// Points the service at a different API base URL (local fakes in tests)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Get the model being used by this service
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a text generation call to the model
    pub async fn generate_text(
        &self,
        prompt: String,
        system_prompt: Option<String>,
    ) -> AgentResult<AgentReply> {
        let api_key = self.api_key.as_ref().ok_or(AgentError::NoApiKey)?;

        let mut messages = Vec::new();
        if let Some(system) = system_prompt {
            messages.push(Message {
                role: "system".to_string(),
                content: system,
            });
        }
        messages.push(Message {
            role: "user".to_string(),
            content: prompt,
        });

        let request = ChatRequest {
            model: self.model.clone(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            messages,
        };

        info!(
            "Making Groq API request: model={}, max_tokens={}",
            request.model, request.max_tokens
        );

        let url = format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH);
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!("Groq API request timed out");
                    AgentError::ApiError(
                        "Request timed out. The model service may be overloaded or unavailable."
                            .to_string(),
                    )
                } else if e.is_connect() {
                    error!("Failed to connect to Groq API: {}", e);
                    AgentError::ApiError(format!("Connection failed: {}", e))
                } else {
                    error!("Groq API request failed: {}", e);
                    AgentError::RequestFailed(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Groq API error: {} - {}", status, error_text);
            return Err(AgentError::ApiError(format!(
                "API returned {}: {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| AgentError::ParseError(e.to_string()))?;

        let text = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AgentError::EmptyReply)?;

        if text.trim().is_empty() {
            return Err(AgentError::EmptyReply);
        }

        Ok(AgentReply {
            text,
            usage: chat_response.usage,
        })
    }
}

impl Default for GroqService {
    fn default() -> Self {
        Self::new()
    }
}
