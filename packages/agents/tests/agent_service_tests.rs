// ABOUTME: Integration tests for the Groq service and agent wrappers
// ABOUTME: Uses wiremock to fake the chat-completions endpoint

use postforge_agents::{ContentAgent, GroqService, ResearchAgent};
use serde_json::json;
use wiremock::matchers::{bearer_token, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "deepseek-r1-distill-llama-70b",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 34, "total_tokens": 46 }
    })
}

fn test_service(server: &MockServer) -> GroqService {
    GroqService::with_api_key("test-key".to_string()).with_base_url(server.uri())
}

#[tokio::test]
async fn generate_text_returns_reply_and_usage() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(bearer_token("test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("hello")))
        .expect(1)
        .mount(&server)
        .await;

    let service = test_service(&server);
    let reply = service
        .generate_text("say hello".to_string(), None)
        .await
        .expect("generate_text should succeed");

    assert_eq!(reply.text, "hello");
    assert_eq!(reply.usage.total_tokens(), 46);
}

#[tokio::test]
async fn api_errors_surface_with_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string("{\"error\":\"rate limit exceeded\"}"),
        )
        .mount(&server)
        .await;

    let service = test_service(&server);
    let err = service
        .generate_text("prompt".to_string(), None)
        .await
        .expect_err("rate-limited request should fail");

    let message = err.to_string();
    assert!(message.contains("429"), "unexpected error: {}", message);
    assert!(message.contains("rate limit exceeded"));
}

#[tokio::test]
async fn empty_choices_are_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [],
            "usage": { "prompt_tokens": 1, "completion_tokens": 0 }
        })))
        .mount(&server)
        .await;

    let service = test_service(&server);
    let err = service
        .generate_text("prompt".to_string(), None)
        .await
        .expect_err("empty reply should fail");

    assert!(matches!(
        err,
        postforge_agents::AgentError::EmptyReply
    ));
}

#[tokio::test]
async fn research_agent_embeds_topic_in_prompt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                {},
                { "role": "user", "content": "Find information about: rust web frameworks" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("summary")))
        .expect(1)
        .mount(&server)
        .await;

    let agent = ResearchAgent::new(test_service(&server));
    let reply = agent
        .run("rust web frameworks")
        .await
        .expect("research run should succeed");

    assert_eq!(reply.text, "summary");
}

#[tokio::test]
async fn content_agent_requests_labeled_sections() {
    let server = MockServer::start().await;

    let posts = "LINKEDIN POST: pro take\nX POST: hot take";
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body(posts)))
        .expect(1)
        .mount(&server)
        .await;

    let agent = ContentAgent::new(test_service(&server));
    let reply = agent
        .run("some research summary")
        .await
        .expect("content run should succeed");

    assert!(reply.text.contains("LINKEDIN POST:"));
    assert!(reply.text.contains("X POST:"));
}
