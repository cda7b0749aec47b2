use tracing::{error, info, warn};

use crate::config::StoreConfig;
use crate::error::{FatalResourceError, StorageError};

pub mod fallback;
pub mod relational;
pub mod types;

pub use types::{UserListing, UserRecord};

use fallback::FallbackStore;
use relational::RelationalStore;

/// The backend chosen at open time, fixed for the store's lifetime.
#[derive(Debug)]
pub enum StorageBackend {
    Relational(RelationalStore),
    Fallback(FallbackStore),
}

/// Single point of truth for user records.
///
/// Hides which physical backend is active behind one operation set.
/// Reads that fail after a successful open are logged and converted to
/// `None`/empty; failed writes surface as [`StorageError`].
#[derive(Debug)]
pub struct UserStore {
    backend: StorageBackend,
}

impl UserStore {
    /// Opens the primary SQLite store, silently degrading to the JSON
    /// bucket when that fails. Errs only when both backends are
    /// unavailable. Call once at the composition root; the backend
    /// choice does not change afterwards.
    pub async fn open(config: &StoreConfig) -> Result<Self, FatalResourceError> {
        let backend = match RelationalStore::open(&config.database_url).await {
            Ok(db) => {
                info!("user store ready (sqlite backend)");
                StorageBackend::Relational(db)
            }
            Err(err) => {
                warn!(error = %err, "primary database unavailable, degrading to fallback bucket");
                let bucket = FallbackStore::open(&config.fallback_path).await?;
                info!("user store ready (fallback backend)");
                StorageBackend::Fallback(bucket)
            }
        };
        Ok(Self { backend })
    }

    /// Inserts a new record and returns its id. The caller pre-checks
    /// email uniqueness; a constraint violation here is exceptional.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<i64, StorageError> {
        match &self.backend {
            StorageBackend::Relational(db) => db.create(name, email, password_hash).await,
            StorageBackend::Fallback(bucket) => bucket.create(name, email, password_hash).await,
        }
    }

    /// First record whose email matches exactly, or `None`.
    pub async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        match &self.backend {
            StorageBackend::Relational(db) => match db.find_by_email(email).await {
                Ok(user) => user,
                Err(err) => {
                    error!(error = %err, "user lookup failed");
                    None
                }
            },
            StorageBackend::Fallback(bucket) => bucket.find_by_email(email).await,
        }
    }

    /// Administrative listing: every record in backend order, with
    /// credential material excluded by construction.
    pub async fn list_all(&self) -> Vec<UserListing> {
        match &self.backend {
            StorageBackend::Relational(db) => match db.list_all().await {
                Ok(rows) => rows,
                Err(err) => {
                    error!(error = %err, "user listing failed");
                    Vec::new()
                }
            },
            StorageBackend::Fallback(bucket) => bucket.list_all().await,
        }
    }

    /// True when open degraded to the JSON bucket.
    pub fn is_fallback(&self) -> bool {
        matches!(self.backend, StorageBackend::Fallback(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config(database_url: &str, fallback_path: &Path) -> StoreConfig {
        StoreConfig {
            database_url: database_url.to_string(),
            fallback_path: fallback_path.to_path_buf(),
        }
    }

    #[tokio::test]
    async fn open_prefers_relational_backend() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config("sqlite::memory:", &dir.path().join("users.json"));

        let store = UserStore::open(&cfg).await.expect("open should succeed");
        assert!(!store.is_fallback());
    }

    #[tokio::test]
    async fn open_degrades_to_fallback_when_database_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist, so sqlite cannot create the file.
        let cfg = config(
            "sqlite:///nonexistent/never/userauth.db",
            &dir.path().join("users.json"),
        );

        let store = UserStore::open(&cfg).await.expect("fallback should rescue open");
        assert!(store.is_fallback());

        let id = store.create("Alice", "a@x.com", "hash").await.unwrap();
        let user = store.find_by_email("a@x.com").await.unwrap();
        assert_eq!(user.id, id);
    }

    #[tokio::test]
    async fn open_fails_fatally_when_both_backends_unavailable() {
        let cfg = config(
            "sqlite:///nonexistent/never/userauth.db",
            Path::new("/nonexistent/never/users.json"),
        );

        let err = UserStore::open(&cfg)
            .await
            .expect_err("no backend should be usable");
        assert!(err.to_string().contains("no usable storage backend"));
    }

    #[tokio::test]
    async fn operations_behave_the_same_on_either_backend() {
        let dir = tempfile::tempdir().unwrap();
        let relational = UserStore::open(&config(
            "sqlite::memory:",
            &dir.path().join("unused.json"),
        ))
        .await
        .unwrap();
        let degraded = UserStore::open(&config(
            "sqlite:///nonexistent/never/userauth.db",
            &dir.path().join("users.json"),
        ))
        .await
        .unwrap();

        for store in [&relational, &degraded] {
            let id = store.create("Alice", "a@x.com", "hash").await.unwrap();
            assert_eq!(store.find_by_email("a@x.com").await.unwrap().id, id);
            assert!(store.find_by_email("missing@x.com").await.is_none());

            let rows = store.list_all().await;
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].email, "a@x.com");
        }
    }
}
