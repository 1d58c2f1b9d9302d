//! Authentication service — credential checks and token validation.

use orgdesk_core::error::ConsoleResult;
use orgdesk_core::models::session::LoginOutput;
use orgdesk_core::models::user::{User, UserRole};
use orgdesk_core::repository::Authenticator;
use tracing::{debug, info, warn};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token;

/// Authentication service for the single console administrator.
///
/// The configured password is hashed once at construction and the
/// plaintext dropped; logins are verified against the hash.
pub struct AuthService {
    config: AuthConfig,
    admin: User,
    admin_password_hash: String,
}

impl AuthService {
    pub fn new(mut config: AuthConfig) -> Result<Self, AuthError> {
        let plaintext = std::mem::take(&mut config.admin_password);
        let admin_password_hash = password::hash_password(&plaintext, config.pepper.as_deref())?;
        let admin = User {
            id: config.admin_id.clone(),
            email: config.admin_email.clone(),
            name: config.admin_name.clone(),
            role: UserRole::SuperAdmin,
        };
        Ok(Self {
            config,
            admin,
            admin_password_hash,
        })
    }

    fn check_credentials(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let email_ok = email == self.admin.email;
        // Always run the hash so a wrong email costs the same as a wrong password.
        let password_ok = password::verify_password(
            password,
            &self.admin_password_hash,
            self.config.pepper.as_deref(),
        )?;
        if email_ok && password_ok {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

impl Authenticator for AuthService {
    async fn login(&self, email: &str, password: &str) -> ConsoleResult<LoginOutput> {
        self.config.latency.pause().await;

        if let Err(e) = self.check_credentials(email, password) {
            warn!(email = %email.trim(), error = %e, "Login rejected");
            return Err(e.into());
        }

        let token = token::issue_session_token(&self.admin, &self.config)?;
        info!(
            user_id = %self.admin.id,
            token_fp = %token::fingerprint(&token),
            "Login succeeded"
        );

        Ok(LoginOutput {
            user: self.admin.clone(),
            token,
        })
    }

    async fn validate_token(&self, token: &str) -> ConsoleResult<User> {
        let claims = token::decode_session_token(token, &self.config)?;

        if claims.sub != self.admin.id {
            warn!(sub = %claims.sub, "Token subject is not a known user");
            return Err(AuthError::TokenInvalid("unknown subject".into()).into());
        }

        debug!(token_fp = %token::fingerprint(token), "Token validated");
        Ok(claims.into_user())
    }
}

#[cfg(test)]
mod tests {
    use orgdesk_core::SimulatedLatency;

    use super::*;

    #[test]
    fn plaintext_password_is_not_retained() {
        let svc = AuthService::new(AuthConfig {
            jwt_secret: "unit-secret".into(),
            latency: SimulatedLatency::none(),
            ..Default::default()
        })
        .unwrap();

        assert!(svc.config.admin_password.is_empty());
        assert!(svc.check_credentials("admin@example.com", "password").is_ok());
    }
}
