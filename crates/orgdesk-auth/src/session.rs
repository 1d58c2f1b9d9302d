//! The console session: authentication state plus its persisted token.

use orgdesk_core::error::ConsoleResult;
use orgdesk_core::models::session::AuthState;
use orgdesk_core::models::user::User;
use orgdesk_core::repository::{Authenticator, SESSION_TOKEN_SLOT, SlotStore};
use tracing::{info, warn};

use crate::token;

/// Holds the current [`AuthState`] and keeps the session token slot in
/// step with it.
///
/// A persisted token is only trusted after the [`Authenticator`]
/// validates it; the user identity always comes from that validation.
pub struct SessionStore<S: SlotStore, A: Authenticator> {
    slots: S,
    auth: A,
    state: AuthState,
}

impl<S: SlotStore, A: Authenticator> SessionStore<S, A> {
    /// Starts anonymous; call [`SessionStore::boot`] to restore a session.
    pub fn new(slots: S, auth: A) -> Self {
        Self {
            slots,
            auth,
            state: AuthState::anonymous(),
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.state.token.as_deref()
    }

    /// Restore the session from the persisted token, if one validates.
    ///
    /// A token that fails validation is erased.
    pub async fn boot(&mut self) -> &AuthState {
        self.state = AuthState::anonymous();

        let persisted = match self.slots.read(SESSION_TOKEN_SLOT) {
            Ok(Some(token)) if !token.trim().is_empty() => token,
            Ok(_) => return &self.state,
            Err(e) => {
                warn!(error = %e, "Session slot unreadable, starting anonymous");
                return &self.state;
            }
        };

        match self.auth.validate_token(&persisted).await {
            Ok(user) => {
                info!(
                    user_id = %user.id,
                    token_fp = %token::fingerprint(&persisted),
                    "Session restored"
                );
                self.state = AuthState::authenticated(user, persisted);
            }
            Err(e) => {
                warn!(
                    error = %e,
                    token_fp = %token::fingerprint(&persisted),
                    "Discarding persisted session token"
                );
                if let Err(e) = self.slots.remove(SESSION_TOKEN_SLOT) {
                    warn!(error = %e, "Failed to erase rejected session token");
                }
            }
        }
        &self.state
    }

    /// Authenticate, persist the token, and adopt the returned user.
    ///
    /// On failure the state is left untouched.
    pub async fn login(&mut self, email: &str, password: &str) -> ConsoleResult<&AuthState> {
        let output = self.auth.login(email, password).await?;
        self.slots.write(SESSION_TOKEN_SLOT, &output.token)?;
        self.state = AuthState::authenticated(output.user, output.token);
        Ok(&self.state)
    }

    /// Erase the persisted token and return to the anonymous state.
    ///
    /// The in-memory state is reset even if erasing the slot fails.
    pub fn logout(&mut self) -> ConsoleResult<()> {
        let user_id = self.state.user.as_ref().map(|u| u.id.clone());
        self.state = AuthState::anonymous();
        self.slots.remove(SESSION_TOKEN_SLOT)?;
        info!(user_id = ?user_id, "Logged out");
        Ok(())
    }
}
