// ABOUTME: Environment-based configuration for the Postforge server
// ABOUTME: Port, database path, and upstream credentials with typed errors

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub database_path: PathBuf,
    pub firebase_api_key: String,
    pub identity_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
        let port = port_str.parse::<u16>()?;
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_database_path());

        let firebase_api_key = env::var("FIREBASE_API_KEY").unwrap_or_default();
        if firebase_api_key.is_empty() {
            warn!("FIREBASE_API_KEY not set - signup requests will be rejected by the provider");
        }

        // Override for the Firebase emulator or test fakes
        let identity_base_url = env::var("FIREBASE_AUTH_URL").ok();

        Ok(Config {
            port,
            database_path,
            firebase_api_key,
            identity_base_url,
        })
    }
}

fn default_database_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".postforge")
        .join("postforge.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_database_path_is_under_the_postforge_dir() {
        let path = default_database_path();
        assert!(path.ends_with(".postforge/postforge.db"));
    }
}
