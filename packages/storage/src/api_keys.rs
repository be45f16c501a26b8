// ABOUTME: User API key storage layer using SQLite
// ABOUTME: One row per user, created on first save and updated in place after

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::StorageError;

/// Per-user API keys as stored
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserApiKeys {
    pub user_id: String,
    pub groq_api_key: Option<String>,
    pub phi_agno_api_key: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Storage layer for user API keys
pub struct ApiKeyStorage {
    pool: SqlitePool,
}

impl ApiKeyStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Upsert the keys for a user: insert on first save, update in place after
    pub async fn save_keys(
        &self,
        user_id: &str,
        groq_api_key: &str,
        phi_agno_api_key: &str,
    ) -> Result<(), StorageError> {
        debug!("Saving API keys for user: {}", user_id);

        sqlx::query(
            r#"
            INSERT INTO user_api_keys (user_id, groq_api_key, phi_agno_api_key)
            VALUES (?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                groq_api_key = excluded.groq_api_key,
                phi_agno_api_key = excluded.phi_agno_api_key,
                updated_at = datetime('now', 'utc')
            "#,
        )
        .bind(user_id)
        .bind(groq_api_key)
        .bind(phi_agno_api_key)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(())
    }

    /// Fetch the keys for a user; unknown users yield `None`, not an error
    pub async fn get_keys(&self, user_id: &str) -> Result<Option<UserApiKeys>, StorageError> {
        debug!("Fetching API keys for user: {}", user_id);

        let keys = sqlx::query_as::<_, UserApiKeys>(
            "SELECT * FROM user_api_keys WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(keys)
    }
}
