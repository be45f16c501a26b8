// ABOUTME: Shared application state for API handlers
// ABOUTME: Holds the database pool, storage layer, agents, and identity client

use std::sync::Arc;

use sqlx::SqlitePool;

use postforge_agents::{ContentAgent, ResearchAgent};
use postforge_auth::IdentityClient;
use postforge_storage::ApiKeyStorage;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub api_key_storage: Arc<ApiKeyStorage>,
    pub research_agent: Arc<ResearchAgent>,
    pub content_agent: Arc<ContentAgent>,
    pub identity: Arc<IdentityClient>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        research_agent: ResearchAgent,
        content_agent: ContentAgent,
        identity: IdentityClient,
    ) -> Self {
        let api_key_storage = Arc::new(ApiKeyStorage::new(pool.clone()));

        Self {
            pool,
            api_key_storage,
            research_agent: Arc::new(research_agent),
            content_agent: Arc::new(content_agent),
            identity: Arc::new(identity),
        }
    }
}
