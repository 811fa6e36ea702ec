//! Seed the document store with the initial catalogue.
//!
//! # Usage
//!
//! ```bash
//! gg-cli seed
//! gg-cli seed --force
//! ```
//!
//! # Environment Variables
//!
//! - `DOCSTORE_BASE_URL` - Base URL of the external document store
//! - `DOCSTORE_API_KEY` - API key sent to the document store

use std::collections::HashSet;

use goalgrocer_server::store::{DocumentStore, seed};
use serde_json::Value;
use tracing::info;

use super::CliError;

/// Write the seed categories, products and users.
///
/// Without `force`, documents whose key already exists in the store are left
/// untouched.
///
/// # Errors
///
/// Returns an error when configuration is missing or a store write fails.
pub async fn run(force: bool) -> Result<(), CliError> {
    let store = super::docstore_from_env()?;

    let mut written = 0usize;
    let mut skipped = 0usize;

    let categories: Vec<(String, Value)> = seed::categories()
        .into_iter()
        .map(|c| (c.id.as_str().to_owned(), document(&c)))
        .collect();
    let products: Vec<(String, Value)> = seed::products()
        .into_iter()
        .map(|p| (p.id.as_str().to_owned(), document(&p)))
        .collect();
    let users: Vec<(String, Value)> = seed::users(chrono::Utc::now())
        .map_err(|error| CliError::Seed(error.to_string()))?
        .into_iter()
        .map(|u| (u.id.as_str().to_owned(), document(&u)))
        .collect();

    for (collection, docs) in [
        ("categories", categories),
        ("products", products),
        ("users", users),
    ] {
        let existing: HashSet<String> = store
            .list_all(collection)
            .await?
            .into_iter()
            .map(|(id, _)| id)
            .collect();

        for (id, doc) in docs {
            if !force && existing.contains(&id) {
                skipped += 1;
                continue;
            }
            store.put(collection, &id, doc, false).await?;
            written += 1;
        }
    }

    info!(written, skipped, "seed complete");
    Ok(())
}

/// Serialize an entity for storage; the document key carries the id.
fn document<T: serde::Serialize>(entity: &T) -> Value {
    let mut value = serde_json::to_value(entity).unwrap_or_default();
    if let Value::Object(map) = &mut value {
        map.remove("id");
    }
    value
}
