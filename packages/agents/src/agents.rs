// ABOUTME: Research and content agent wrappers around the Groq service
// ABOUTME: Owns the system prompts and instruction strings for each agent

use tracing::info;

use crate::service::{AgentReply, AgentResult, GroqService};

const RESEARCH_SYSTEM_PROMPT: &str = "\
You are an AI research assistant specializing in AI and technology trends.
Search for the latest information on the given topic using available tools.
Extract key insights from articles, research papers, and Wikipedia.
Summarize the findings in a concise format for content creation.";

const CONTENT_SYSTEM_PROMPT: &str = "\
You are a creative AI content writer specializing in LinkedIn and X posts.
Create two separate posts wrapped in MARKDOWN formatting:
For LinkedIn: Use ## LINKEDIN POST: as header
For X: Use ## X POST: as header
Include 3-5 relevant hashtags at the end of each post
Ensure proper spacing between paragraphs
Use emojis that match the content theme
Maintain professional tone for LinkedIn, casual for X
Use **bold** for emphasis and *italic* for subtle points
Separate sections with ---
Format hashtags like: #AI #Tech";

/// Agent that gathers and summarizes information on a topic
pub struct ResearchAgent {
    service: GroqService,
}

impl ResearchAgent {
    pub fn new(service: GroqService) -> Self {
        Self { service }
    }

    /// Run the research agent against a topic, returning free-form text
    pub async fn run(&self, topic: &str) -> AgentResult<AgentReply> {
        info!("Running research agent: topic={}", topic);

        let prompt = format!("Find information about: {}", topic);
        self.service
            .generate_text(prompt, Some(RESEARCH_SYSTEM_PROMPT.to_string()))
            .await
    }
}

/// Agent that turns a research summary into platform-specific posts
pub struct ContentAgent {
    service: GroqService,
}

impl ContentAgent {
    pub fn new(service: GroqService) -> Self {
        Self { service }
    }

    /// Run the content agent against a research summary
    pub async fn run(&self, research: &str) -> AgentResult<AgentReply> {
        info!("Running content agent on research summary");

        let prompt = format!(
            "Based on this research: {}\n\n\
             Create two posts:\n\
             1. A LinkedIn post (300-500 characters) that is professional yet engaging\n\
             2. An X post (max 280 characters) that is concise and attention-grabbing\n\n\
             Include relevant hashtags for both platforms.\n\
             Format your response with clear 'LINKEDIN POST:' and 'X POST:' sections.",
            research
        );
        self.service
            .generate_text(prompt, Some(CONTENT_SYSTEM_PROMPT.to_string()))
            .await
    }
}
