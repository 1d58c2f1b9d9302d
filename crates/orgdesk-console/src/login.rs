//! Login screen state.

use orgdesk_auth::session::SessionStore;
use orgdesk_core::error::ConsoleResult;
use orgdesk_core::repository::{Authenticator, SlotStore};

use crate::components::{Button, ButtonSize, ButtonVariant, Card, Input};

/// Credentials being typed plus the outcome of the last attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    error: Option<String>,
    busy: bool,
}

impl Default for LoginForm {
    /// Prefilled with the demo administrator credentials.
    fn default() -> Self {
        Self {
            email: "admin@example.com".into(),
            password: "password".into(),
            error: None,
            busy: false,
        }
    }
}

impl LoginForm {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Attempt a login through `session`. The failure message is kept for
    /// display and the error returned to the caller.
    pub async fn submit<S, A>(&mut self, session: &mut SessionStore<S, A>) -> ConsoleResult<()>
    where
        S: SlotStore,
        A: Authenticator,
    {
        self.busy = true;
        self.error = None;

        let result = session.login(&self.email, &self.password).await.map(|_| ());
        if let Err(e) = &result {
            self.error = Some(e.to_string());
        }

        self.busy = false;
        result
    }

    pub fn render(&self) -> String {
        let body = [
            Input::new("Email", self.email.as_str())
                .placeholder("you@company.com")
                .icon('@')
                .to_string(),
            Input::new("Password", self.password.as_str())
                .masked()
                .icon('#')
                .error(self.error.clone())
                .to_string(),
            Button::new("Sign In")
                .variant(ButtonVariant::Gradient)
                .size(ButtonSize::Lg)
                .loading(self.busy)
                .to_string(),
        ]
        .join("\n");
        Card::titled("orgdesk: Sign in", body).to_string()
    }
}
