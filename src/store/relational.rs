use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use time::OffsetDateTime;
use tracing::debug;

use crate::error::StorageError;
use crate::store::types::{UserListing, UserRecord};

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ','now'))
);
"#;

/// Primary backend: an on-device SQLite database.
#[derive(Debug, Clone)]
pub struct RelationalStore {
    pool: SqlitePool,
}

impl RelationalStore {
    /// Opens (creating if missing) the database and applies the schema.
    ///
    /// The pool holds a single connection: write contention is nil on a
    /// single-user device and `sqlite::memory:` stays coherent in tests.
    pub async fn open(url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        sqlx::query(CREATE_USERS_TABLE).execute(&pool).await?;
        debug!(%url, "sqlite database opened");
        Ok(Self { pool })
    }

    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<i64, StorageError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (name, email, password_hash, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(&self.pool)
        .await?;
        debug!(user_id = id, "user row inserted");
        Ok(id)
    }

    /// Exact-match lookup, case-sensitive (BINARY collation).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StorageError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = ?1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn list_all(&self) -> Result<Vec<UserListing>, StorageError> {
        let rows = sqlx::query_as::<_, UserListing>(
            r#"
            SELECT id, name, email, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> RelationalStore {
        RelationalStore::open("sqlite::memory:")
            .await
            .expect("in-memory sqlite should open")
    }

    #[tokio::test]
    async fn create_then_find_roundtrip() {
        let store = memory_store().await;
        let id = store
            .create("Alice", "a@x.com", "$argon2id$fake")
            .await
            .expect("create should succeed");
        assert!(id > 0);

        let user = store
            .find_by_email("a@x.com")
            .await
            .expect("lookup should succeed")
            .expect("user should exist");
        assert_eq!(user.id, id);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.password_hash, "$argon2id$fake");
    }

    #[tokio::test]
    async fn find_is_case_sensitive_and_misses_unknown() {
        let store = memory_store().await;
        store
            .create("Alice", "a@x.com", "h")
            .await
            .expect("create should succeed");

        assert!(store.find_by_email("A@X.COM").await.unwrap().is_none());
        assert!(store.find_by_email("b@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_violates_constraint() {
        let store = memory_store().await;
        store
            .create("Alice", "a@x.com", "h1")
            .await
            .expect("first create should succeed");

        let err = store
            .create("Alice2", "a@x.com", "h2")
            .await
            .expect_err("second create should hit the unique constraint");
        assert!(matches!(err, StorageError::Database(_)));
    }

    #[tokio::test]
    async fn list_all_is_ordered_and_credential_free() {
        let store = memory_store().await;
        let first = store.create("Alice", "a@x.com", "h1").await.unwrap();
        let second = store.create("Bob", "b@x.com", "h2").await.unwrap();

        let rows = store.list_all().await.expect("list should succeed");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, first);
        assert_eq!(rows[1].id, second);

        let json = serde_json::to_string(&rows).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("h1"));
    }
}
