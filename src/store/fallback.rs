use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::StorageError;
use crate::store::types::{UserListing, UserRecord};

#[derive(Debug)]
struct Bucket {
    users: Vec<UserRecord>,
    next_id: i64,
}

/// Fallback backend: one JSON file holding the ordered list of records.
///
/// Used when the database cannot be opened. Identifiers come from a
/// monotonic counter seeded from the highest persisted id, so they
/// survive re-open and cannot collide the way wall-clock ids could.
#[derive(Debug)]
pub struct FallbackStore {
    path: PathBuf,
    bucket: Mutex<Bucket>,
}

impl FallbackStore {
    /// Loads the bucket, creating it as an empty list when absent.
    pub async fn open(path: &Path) -> Result<Self, StorageError> {
        let users: Vec<UserRecord> = match tokio::fs::read(path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tokio::fs::write(path, b"[]").await?;
                Vec::new()
            }
            Err(err) => return Err(err.into()),
        };
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        debug!(path = %path.display(), records = users.len(), "fallback bucket opened");
        Ok(Self {
            path: path.to_path_buf(),
            bucket: Mutex::new(Bucket { users, next_id }),
        })
    }

    /// Appends a record and persists the whole bucket. In-memory state
    /// advances only after the write lands, so a failed write never
    /// leaves a phantom record or burns an id.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<i64, StorageError> {
        let mut bucket = self.bucket.lock().await;
        let id = bucket.next_id;
        let record = UserRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };

        let mut snapshot = bucket.users.clone();
        snapshot.push(record);
        let bytes = serde_json::to_vec_pretty(&snapshot)?;
        tokio::fs::write(&self.path, bytes).await?;

        bucket.users = snapshot;
        bucket.next_id = id + 1;
        debug!(user_id = id, "user appended to fallback bucket");
        Ok(id)
    }

    /// Linear scan for the first exact (case-sensitive) match.
    pub async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        let bucket = self.bucket.lock().await;
        bucket.users.iter().find(|u| u.email == email).cloned()
    }

    /// All records in insertion order, credential dropped.
    pub async fn list_all(&self) -> Vec<UserListing> {
        let bucket = self.bucket.lock().await;
        bucket.users.iter().map(UserListing::from).collect()
    }
}
