//! Local account store with credential authentication.
//!
//! Two layers: [`store::UserStore`] owns user records behind a dual
//! backend (SQLite, with a JSON flat-file bucket as fallback when the
//! database cannot be opened), and [`auth::AuthService`] implements
//! sign-up/login policy on top of it. Construct the store once at the
//! composition root and hand it to the service:
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use std::sync::Arc;
//! use userauth::{AuthService, StoreConfig, UserStore};
//!
//! let store = Arc::new(UserStore::open(&StoreConfig::from_env()).await?);
//! let auth = AuthService::new(store);
//! let result = auth.sign_up("Alice", "a@x.com", "secret1").await;
//! assert!(result.success);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;

pub use auth::dto::{AuthResult, UserSummary};
pub use auth::AuthService;
pub use config::StoreConfig;
pub use error::{FatalResourceError, StorageError};
pub use store::{UserStore, UserListing, UserRecord};
