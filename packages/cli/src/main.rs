// ABOUTME: Entry point for the Postforge server binary
// ABOUTME: Installs the tracing subscriber and starts the HTTP server

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("🚀 Starting Postforge server...");

    postforge_cli::run_server().await
}
