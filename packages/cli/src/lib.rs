// ABOUTME: Server bootstrap for Postforge
// ABOUTME: Wires config, database, agents, identity client, and the router

use std::net::SocketAddr;

pub mod config;

use config::Config;
use postforge_agents::{ContentAgent, GroqService, ResearchAgent};
use postforge_api::{create_router, AppState};
use postforge_auth::IdentityClient;

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    let pool = postforge_storage::init_pool(&config.database_path).await?;

    let research_agent = ResearchAgent::new(GroqService::new());
    let content_agent = ContentAgent::new(GroqService::new());

    let mut identity = IdentityClient::new(config.firebase_api_key.clone());
    if let Some(base_url) = &config.identity_base_url {
        identity = identity.with_base_url(base_url.clone());
    }

    let state = AppState::new(pool, research_agent, content_agent, identity);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    println!("✅ Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
