//! Document store collaborator.
//!
//! Persistence is delegated to an external hosted document database, seen
//! here as an opaque keyed-collection API: list a collection, put (with
//! optional merge), delete. No schema is enforced beyond what this system
//! writes; documents travel as raw `serde_json::Value`.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use crate::config::DocstoreConfig;

use super::StoreError;

/// Opaque document collection API.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch every document in a collection as `(id, document)` pairs.
    async fn list_all(&self, collection: &str) -> Result<Vec<(String, Value)>, StoreError>;

    /// Write a document. With `merge` set, top-level fields are merged into
    /// the existing document instead of replacing it.
    async fn put(
        &self,
        collection: &str,
        id: &str,
        doc: Value,
        merge: bool,
    ) -> Result<(), StoreError>;

    /// Delete a document. Deleting a missing document is not an error.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}

/// HTTP implementation against the hosted document store.
///
/// Collections map to `{base_url}/{collection}`; a collection listing is a
/// JSON object keyed by document id. Merge writes use `PATCH`, full writes
/// `PUT`.
#[derive(Clone)]
pub struct HttpDocumentStore {
    inner: Arc<HttpDocumentStoreInner>,
}

struct HttpDocumentStoreInner {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpDocumentStore {
    /// Create a new client for the configured store.
    #[must_use]
    pub fn new(config: &DocstoreConfig) -> Self {
        Self {
            inner: Arc::new(HttpDocumentStoreInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                api_key: config
                    .api_key
                    .as_ref()
                    .map(|key| key.expose_secret().to_string()),
            }),
        }
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let mut builder = self.inner.client.request(method, url);
        if let Some(key) = &self.inner.api_key {
            builder = builder.header("x-api-key", key);
        }
        builder
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Status {
            status: status.as_u16(),
            body: body.chars().take(200).collect(),
        })
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn list_all(&self, collection: &str) -> Result<Vec<(String, Value)>, StoreError> {
        let url = format!("{}/{collection}", self.inner.base_url);
        let response = self.request(reqwest::Method::GET, url).send().await?;
        let response = Self::check(response).await?;

        // A missing collection lists as null
        let body: Option<BTreeMap<String, Value>> = response.json().await?;
        let docs = body.unwrap_or_default().into_iter().collect::<Vec<_>>();
        debug!(collection, count = docs.len(), "listed collection");
        Ok(docs)
    }

    async fn put(
        &self,
        collection: &str,
        id: &str,
        doc: Value,
        merge: bool,
    ) -> Result<(), StoreError> {
        let url = format!("{}/{collection}/{id}", self.inner.base_url);
        let method = if merge {
            reqwest::Method::PATCH
        } else {
            reqwest::Method::PUT
        };
        let response = self.request(method, url).json(&doc).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let url = format!("{}/{collection}/{id}", self.inner.base_url);
        let response = self.request(reqwest::Method::DELETE, url).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

/// In-memory implementation for tests and offline tooling.
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<Mutex<HashMap<String, BTreeMap<String, Value>>>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch one document, for assertions in tests.
    pub async fn get(&self, collection: &str, id: &str) -> Option<Value> {
        let collections = self.collections.lock().await;
        collections.get(collection)?.get(id).cloned()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list_all(&self, collection: &str) -> Result<Vec<(String, Value)>, StoreError> {
        let collections = self.collections.lock().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default())
    }

    async fn put(
        &self,
        collection: &str,
        id: &str,
        doc: Value,
        merge: bool,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().await;
        let docs = collections.entry(collection.to_owned()).or_default();
        if merge
            && let Some(Value::Object(existing)) = docs.get_mut(id)
            && let Value::Object(incoming) = doc
        {
            for (key, value) in incoming {
                existing.insert(key, value);
            }
            return Ok(());
        }
        docs.insert(id.to_owned(), doc);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().await;
        if let Some(docs) = collections.get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }
}
