// ABOUTME: HTTP request handler for the two-phase post generation pipeline
// ABOUTME: Research agent, then content agent, then the post parser

use axum::{extract::State, response::Response, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use postforge_agents::parse_posts;

use super::response::{bad_request, internal_error};
use super::state::AppState;

const DEFAULT_TOPIC: &str = "latest trends in AI";

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub topic: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub research_summary: String,
    pub linkedin_post: String,
    pub x_post: String,
}

/// Generate a LinkedIn post and an X post for a topic
pub async fn generate_posts(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, Response> {
    let topic = request.topic.unwrap_or_else(|| DEFAULT_TOPIC.to_string());
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(bad_request("Topic is required"));
    }

    info!("Generating posts for topic: {}", topic);

    let research = state.research_agent.run(topic).await.map_err(|e| {
        error!("Research failed: {}", e);
        internal_error("Research phase failed")
    })?;

    let content = state.content_agent.run(&research.text).await.map_err(|e| {
        error!("Content generation failed: {}", e);
        internal_error("Content creation failed")
    })?;

    let posts = parse_posts(&content.text);

    Ok(Json(GenerateResponse {
        research_summary: research.text,
        linkedin_post: posts.linkedin,
        x_post: posts.x,
    }))
}
