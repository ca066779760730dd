#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserClaims;

/// Authentication state tracking the session token, decoded claims, and
/// the bootstrap loading flag.
///
/// `loading` starts `true` so pages do not redirect to `/login` before the
/// stored token has been inspected.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserClaims>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Whether a verified-enough session exists to call the API.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}
