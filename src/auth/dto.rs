use serde::Serialize;

/// Public part of the user returned to the UI layer.
///
/// Built from a [`UserRecord`](crate::UserRecord) by dropping the
/// credential hash; there is no way to smuggle it back in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Uniform envelope returned by every authentication operation.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

impl AuthResult {
    pub(crate) fn accepted(message: &str, user: UserSummary) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            user: Some(user),
        }
    }

    pub(crate) fn rejected(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            user: None,
        }
    }
}
