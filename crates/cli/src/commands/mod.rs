//! CLI command implementations.

pub mod promote;
pub mod seed;

use goalgrocer_server::config::DocstoreConfig;
use goalgrocer_server::store::HttpDocumentStore;
use secrecy::SecretString;
use thiserror::Error;

/// Errors shared by the CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Document store operation failed.
    #[error("Document store error: {0}")]
    Store(#[from] goalgrocer_server::store::StoreError),

    /// The referenced user does not exist.
    #[error("No user with id: {0}")]
    UserNotFound(String),

    /// Seed data failed validation.
    #[error("Invalid seed data: {0}")]
    Seed(String),
}

/// Build a document store client from `DOCSTORE_BASE_URL` / `DOCSTORE_API_KEY`.
pub fn docstore_from_env() -> Result<HttpDocumentStore, CliError> {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DOCSTORE_BASE_URL")
        .map_err(|_| CliError::MissingEnvVar("DOCSTORE_BASE_URL"))?;
    let config = DocstoreConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        api_key: std::env::var("DOCSTORE_API_KEY")
            .ok()
            .map(SecretString::from),
    };
    Ok(HttpDocumentStore::new(&config))
}
