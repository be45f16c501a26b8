// ABOUTME: LLM agent integration for Postforge research and content generation
// ABOUTME: Wraps the Groq chat-completions API and parses agent output into posts

pub mod agents;
pub mod posts;
pub mod service;

pub use agents::{ContentAgent, ResearchAgent};
pub use posts::{parse_posts, ParsedPosts, X_POST_LIMIT};
pub use service::{AgentError, AgentReply, AgentResult, GroqService, Usage};
