use std::env;
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://volunteers.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3333;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid PORT value '{value}': {reason}")]
    InvalidPort { value: String, reason: String },
}

/// Bootstrap settings for infrastructure configuration
///
/// Everything the process needs before it can serve a request: where the
/// database lives and which interface/port to bind. Loaded from environment
/// variables with defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
}

impl BootstrapSettings {
    /// Load bootstrap settings from environment variables
    pub fn from_env() -> Result<Self, SettingsError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let server_host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let server_port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|e| SettingsError::InvalidPort {
                    value,
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            server_host,
            server_port,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    /// Address string for the TCP listener, e.g. "0.0.0.0:3333"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
