use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Full user record as held by the active backend.
///
/// Carries the credential hash and therefore never crosses the public
/// surface: listings use [`UserListing`] and the auth layer returns
/// [`UserSummary`](crate::auth::dto::UserSummary), both of which drop
/// the hash by construction. Serde is used for the fallback bucket's
/// on-disk format only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: i64,                    // backend-assigned, never reused
    pub name: String,               // display name
    pub email: String,              // natural key, case-sensitive
    pub password_hash: String,      // PHC string, never the raw password
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime, // assigned at write time
}

/// Credential-free row returned by [`UserStore::list_all`](crate::UserStore::list_all).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserListing {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<&UserRecord> for UserListing {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            created_at: record.created_at,
        }
    }
}
