use std::path::PathBuf;

use serde::Deserialize;

/// Storage configuration resolved at the composition root.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// SQLite connection URL for the primary backend.
    pub database_url: String,
    /// Path of the JSON bucket used when the database cannot be opened.
    pub fallback_path: PathBuf,
}

impl StoreConfig {
    /// Reads `AUTH_DATABASE_URL` and `AUTH_FALLBACK_PATH`, loading `.env`
    /// first. Every value has a default; this never fails.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let database_url = std::env::var("AUTH_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://userauth.db".into());
        let fallback_path = std::env::var("AUTH_FALLBACK_PATH")
            .unwrap_or_else(|_| "users.json".into())
            .into();
        Self {
            database_url,
            fallback_path,
        }
    }
}
