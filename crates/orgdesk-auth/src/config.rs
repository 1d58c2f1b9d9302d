//! Authentication configuration.

use orgdesk_core::SimulatedLatency;

use crate::token;

/// Configuration for the authentication service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Login email of the console administrator.
    pub admin_email: String,
    /// Plaintext administrator password. Hashed with Argon2id when the
    /// service is built; the service keeps only the hash.
    pub admin_password: String,
    /// Stable identifier of the administrator account.
    pub admin_id: String,
    /// Display name returned with the administrator identity.
    pub admin_name: String,
    /// HMAC secret for HS256 session tokens.
    pub jwt_secret: String,
    /// JWT issuer (`iss` claim).
    pub jwt_issuer: String,
    /// Session token lifetime in seconds (default: 28_800 = 8 hours).
    pub token_lifetime_secs: u64,
    /// Optional pepper prepended to passwords before hashing.
    pub pepper: Option<String>,
    /// Delay applied to every login attempt.
    pub latency: SimulatedLatency,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_email: "admin@example.com".into(),
            admin_password: "password".into(),
            admin_id: "admin-1".into(),
            admin_name: "Super Admin".into(),
            jwt_secret: token::generate_secret(),
            jwt_issuer: "orgdesk".into(),
            token_lifetime_secs: 28_800,
            pepper: None,
            latency: SimulatedLatency::fixed(800),
        }
    }
}
