use thiserror::Error;

/// Backend failure during a write, or while opening a backend.
///
/// Business-rule rejections (duplicate email, bad credentials) are not
/// errors; they travel in the [`AuthResult`](crate::AuthResult)
/// envelope. A `StorageError` while opening the primary database makes
/// the store degrade to the fallback bucket; after initialization it is
/// logged by the service and mapped to a generic retry message.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("fallback bucket I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("fallback bucket encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Both backends unavailable. Not recoverable locally; propagate to the
/// process.
#[derive(Debug, Error)]
#[error("no usable storage backend: {source}")]
pub struct FatalResourceError {
    #[from]
    source: StorageError,
}
