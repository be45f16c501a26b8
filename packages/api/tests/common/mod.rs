// ABOUTME: Common test utilities for API integration tests
// ABOUTME: Spawns the router on a random port with wiremock upstream fakes

use sqlx::SqlitePool;
use wiremock::MockServer;

use postforge_agents::{ContentAgent, GroqService, ResearchAgent};
use postforge_api::{create_router, AppState};
use postforge_auth::IdentityClient;

/// Test context containing server URL, database pool, and upstream fakes
pub struct TestContext {
    pub base_url: String,
    #[allow(dead_code)]
    pub pool: SqlitePool,
    #[allow(dead_code)]
    pub groq: MockServer,
    #[allow(dead_code)]
    pub identity: MockServer,
}

/// Create a test server with isolated database and faked upstreams
pub async fn setup_test_server() -> TestContext {
    let groq = MockServer::start().await;
    let identity = MockServer::start().await;

    let pool = postforge_storage::init_memory_pool()
        .await
        .expect("Failed to create database pool");

    let research_agent = ResearchAgent::new(
        GroqService::with_api_key("test-key".to_string()).with_base_url(groq.uri()),
    );
    let content_agent = ContentAgent::new(
        GroqService::with_api_key("test-key".to_string()).with_base_url(groq.uri()),
    );
    let identity_client =
        IdentityClient::new("test-project-key".to_string()).with_base_url(identity.uri());

    let state = AppState::new(pool.clone(), research_agent, content_agent, identity_client);
    let app = create_router(state);

    // Bind to random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    // Spawn server
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give server time to start
    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

    TestContext {
        base_url,
        pool,
        groq,
        identity,
    }
}

/// Helper to make GET requests
#[allow(dead_code)]
pub async fn get(base_url: &str, path: &str) -> reqwest::Response {
    let client = reqwest::Client::new();
    client
        .get(format!("{}{}", base_url, path))
        .send()
        .await
        .expect("Failed to make GET request")
}

/// Helper to make POST requests with JSON body
#[allow(dead_code)]
pub async fn post_json(
    base_url: &str,
    path: &str,
    body: &serde_json::Value,
) -> reqwest::Response {
    let client = reqwest::Client::new();
    client
        .post(format!("{}{}", base_url, path))
        .json(body)
        .send()
        .await
        .expect("Failed to make POST request")
}

/// Groq chat-completion reply body with the given assistant content
#[allow(dead_code)]
pub fn chat_completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "deepseek-r1-distill-llama-70b",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30 }
    })
}
