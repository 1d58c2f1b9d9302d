//! Session (authentication state) model.

use serde::{Deserialize, Serialize};

use super::user::User;

/// Authentication state of the current console session.
///
/// Either fully empty (anonymous) or fully populated; the constructors
/// are the only way the two shapes are built.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub token: Option<String>,
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: User, token: String) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
            token: Some(token),
        }
    }
}

/// Successful login result: the operator identity plus an opaque token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginOutput {
    pub user: User,
    pub token: String,
}
