//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DOCSTORE_BASE_URL` - Base URL of the external document store
//!
//! ## Optional
//! - `GOALGROCER_HOST` - Bind address (default: 127.0.0.1)
//! - `GOALGROCER_PORT` - Listen port (default: 3000)
//! - `DOCSTORE_API_KEY` - API key sent to the document store
//! - `AI_API_KEY` - Key for the AI recommendation collaborator; when unset
//!   the recommendation path runs rules-only
//! - `AI_API_BASE_URL` - AI endpoint base (default: <https://api.openai.com/v1>)
//! - `AI_MODEL` - AI model name (default: gpt-4o-mini)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// External document store configuration
    pub docstore: DocstoreConfig,
    /// AI recommendation collaborator; `None` disables the AI path
    pub ai: Option<AiConfig>,
}

/// Document store connection configuration.
#[derive(Clone)]
pub struct DocstoreConfig {
    /// Base URL, e.g. `https://docs.example.com/v1`
    pub base_url: String,
    /// API key sent with every request, if the store requires one
    pub api_key: Option<SecretString>,
}

impl std::fmt::Debug for DocstoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocstoreConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// AI text-completion collaborator configuration.
#[derive(Clone)]
pub struct AiConfig {
    /// OpenAI-compatible endpoint base URL
    pub base_url: String,
    /// Model name passed in the request body
    pub model: String,
    /// Bearer token
    pub api_key: SecretString,
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("GOALGROCER_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("GOALGROCER_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("GOALGROCER_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("GOALGROCER_PORT".to_string(), e.to_string()))?;

        let docstore = DocstoreConfig {
            base_url: get_required_env("DOCSTORE_BASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            api_key: get_optional_env("DOCSTORE_API_KEY").map(SecretString::from),
        };

        let ai = get_optional_env("AI_API_KEY").map(|key| AiConfig {
            base_url: get_env_or_default("AI_API_BASE_URL", "https://api.openai.com/v1")
                .trim_end_matches('/')
                .to_string(),
            model: get_env_or_default("AI_MODEL", "gpt-4o-mini"),
            api_key: SecretString::from(key),
        });

        Ok(Self {
            host,
            port,
            docstore,
            ai,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            docstore: DocstoreConfig {
                base_url: "http://localhost:8080/v1".to_string(),
                api_key: None,
            },
            ai: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_docstore_config_debug_redacts_key() {
        let config = DocstoreConfig {
            base_url: "http://localhost:8080/v1".to_string(),
            api_key: Some(SecretString::from("super_secret_key")),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_key"));
    }

    #[test]
    fn test_ai_config_debug_redacts_key() {
        let config = AiConfig {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: SecretString::from("sk-super-secret"),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("gpt-4o-mini"));
        assert!(!debug_output.contains("sk-super-secret"));
    }
}
