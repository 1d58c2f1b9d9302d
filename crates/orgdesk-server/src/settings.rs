//! Server settings.
//!
//! Layered as: built-in defaults, then an optional TOML file, then
//! `ORGDESK__*` environment variables (`__` separates nesting levels,
//! e.g. `ORGDESK__AUTH__ADMIN_EMAIL`).

use std::path::{Path, PathBuf};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use orgdesk_auth::AuthConfig;
use orgdesk_auth::token::generate_secret;
use orgdesk_core::SimulatedLatency;
use orgdesk_store::{StoreBackend, StoreConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: String,
    /// Directory for slot files. Unset keeps everything in memory and
    /// loses it on exit.
    pub data_dir: Option<PathBuf>,
    pub latency_min_ms: u64,
    pub latency_max_ms: u64,
    pub auth: AuthSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".into(),
            data_dir: None,
            latency_min_ms: 600,
            latency_max_ms: 800,
            auth: AuthSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuthSettings {
    pub admin_email: String,
    pub admin_password: String,
    /// Unset generates a fresh secret per process, which invalidates
    /// every previously issued token on restart.
    pub jwt_secret: Option<String>,
    pub jwt_issuer: String,
    pub token_lifetime_secs: u64,
    pub pepper: Option<String>,
    pub login_latency_ms: u64,
}

impl Default for AuthSettings {
    fn default() -> Self {
        let defaults = AuthConfig::default();
        Self {
            admin_email: defaults.admin_email,
            admin_password: defaults.admin_password,
            jwt_secret: None,
            jwt_issuer: defaults.jwt_issuer,
            token_lifetime_secs: defaults.token_lifetime_secs,
            pepper: None,
            login_latency_ms: defaults.latency.max_ms,
        }
    }
}

impl Settings {
    /// Load settings from `path` (optional) and the environment.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        ConfigBuilder::builder()
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(
                Environment::with_prefix("ORGDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn store_config(&self) -> StoreConfig {
        let backend = match &self.data_dir {
            Some(dir) => StoreBackend::File { dir: dir.clone() },
            None => StoreBackend::Memory,
        };
        StoreConfig {
            backend,
            latency: SimulatedLatency::between(self.latency_min_ms, self.latency_max_ms),
        }
    }

    pub fn auth_config(&self) -> AuthConfig {
        let auth = &self.auth;
        AuthConfig {
            admin_email: auth.admin_email.clone(),
            admin_password: auth.admin_password.clone(),
            jwt_secret: auth.jwt_secret.clone().unwrap_or_else(generate_secret),
            jwt_issuer: auth.jwt_issuer.clone(),
            token_lifetime_secs: auth.token_lifetime_secs,
            pepper: auth.pepper.clone(),
            latency: SimulatedLatency::fixed(auth.login_latency_ms),
            ..AuthConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_settings(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        std::fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings.bind_addr, Settings::default().bind_addr);
        assert_eq!(settings.auth.admin_email, "admin@example.com");
        assert_eq!(settings.store_config().backend, StoreBackend::Memory);
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_settings(
            "bind_addr = \"0.0.0.0:9000\"\nlatency_min_ms = 0\nlatency_max_ms = 0\n\n\
             [auth]\nadmin_email = \"ops@corp.io\"\njwt_secret = \"fixed\"\n",
        );

        let settings = Settings::load(file.path()).unwrap();

        assert_eq!(settings.bind_addr, "0.0.0.0:9000");
        assert_eq!(settings.store_config().latency, SimulatedLatency::none());
        let auth = settings.auth_config();
        assert_eq!(auth.admin_email, "ops@corp.io");
        assert_eq!(auth.admin_password, "password");
        assert_eq!(auth.jwt_secret, "fixed");
    }

    #[test]
    fn data_dir_selects_file_backend() {
        let file = write_settings("data_dir = \"/var/lib/orgdesk\"\n");

        let settings = Settings::load(file.path()).unwrap();

        assert_eq!(
            settings.store_config().backend,
            StoreBackend::File {
                dir: PathBuf::from("/var/lib/orgdesk")
            }
        );
    }
}
