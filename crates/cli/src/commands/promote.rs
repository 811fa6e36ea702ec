//! Grant a user the admin role.
//!
//! # Usage
//!
//! ```bash
//! gg-cli promote-admin -u u-thandi
//! ```
//!
//! # Environment Variables
//!
//! - `DOCSTORE_BASE_URL` - Base URL of the external document store
//! - `DOCSTORE_API_KEY` - API key sent to the document store

use goalgrocer_server::store::DocumentStore;
use serde_json::json;
use tracing::info;

use super::CliError;

/// Merge `role: admin` into the user's document.
///
/// # Errors
///
/// Returns an error when configuration is missing, the user does not exist,
/// or the store write fails.
pub async fn run(user_id: &str) -> Result<(), CliError> {
    let store = super::docstore_from_env()?;

    let exists = store
        .list_all("users")
        .await?
        .into_iter()
        .any(|(id, _)| id == user_id);
    if !exists {
        return Err(CliError::UserNotFound(user_id.to_owned()));
    }

    store
        .put("users", user_id, json!({ "role": "admin" }), true)
        .await?;

    info!(user_id, "user promoted to admin");
    Ok(())
}
