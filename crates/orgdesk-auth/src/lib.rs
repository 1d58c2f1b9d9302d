//! orgdesk Auth — credential verification, session token issuance and
//! validation, and the persisted console session.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod session;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::AuthService;
pub use session::SessionStore;
pub use token::SessionClaims;
