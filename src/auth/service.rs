use std::sync::Arc;

use tracing::{debug, error, info};

use crate::auth::dto::{AuthResult, UserSummary};
use crate::auth::password::{hash_password, verify_password};
use crate::store::UserStore;

const MSG_DUPLICATE: &str = "An account with this email already exists";
const MSG_CREATED: &str = "Account created successfully";
// Deliberately identical for unknown email and wrong password, so a
// caller cannot probe which accounts exist.
const MSG_INVALID_CREDENTIALS: &str = "Invalid email or password";
const MSG_LOGIN_OK: &str = "Login successful";
const MSG_SIGNUP_RETRY: &str = "Failed to create account. Please try again.";
const MSG_LOGIN_RETRY: &str = "Login failed. Please try again.";

/// Sign-up and login policy on top of an injected [`UserStore`].
///
/// Holds no persistent state of its own and never sees a raw password
/// past the hashing/verification boundary. Storage faults are logged
/// here and reach the caller only as a generic retry message.
pub struct AuthService {
    store: Arc<UserStore>,
}

impl AuthService {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> AuthResult {
        debug!(%email, "sign-up requested");

        if self.store.find_by_email(email).await.is_some() {
            debug!(%email, "email already registered");
            return AuthResult::rejected(MSG_DUPLICATE);
        }

        let hash = match hash_password(password) {
            Ok(h) => h,
            Err(e) => {
                error!(error = %e, "password hashing failed");
                return AuthResult::rejected(MSG_SIGNUP_RETRY);
            }
        };

        match self.store.create(name, email, &hash).await {
            Ok(id) => {
                info!(user_id = id, %email, "account created");
                AuthResult::accepted(
                    MSG_CREATED,
                    UserSummary {
                        id,
                        name: name.to_string(),
                        email: email.to_string(),
                    },
                )
            }
            Err(e) => {
                error!(error = %e, "create user failed");
                AuthResult::rejected(MSG_SIGNUP_RETRY)
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthResult {
        debug!(%email, "login requested");

        let Some(user) = self.store.find_by_email(email).await else {
            debug!(%email, "login for unknown email");
            return AuthResult::rejected(MSG_INVALID_CREDENTIALS);
        };

        match verify_password(password, &user.password_hash) {
            Ok(true) => {
                info!(user_id = user.id, "login succeeded");
                AuthResult::accepted(
                    MSG_LOGIN_OK,
                    UserSummary {
                        id: user.id,
                        name: user.name,
                        email: user.email,
                    },
                )
            }
            Ok(false) => {
                debug!(user_id = user.id, "password mismatch");
                AuthResult::rejected(MSG_INVALID_CREDENTIALS)
            }
            Err(e) => {
                error!(error = %e, "password verification failed");
                AuthResult::rejected(MSG_LOGIN_RETRY)
            }
        }
    }
}
