//! Client for the OpenAI-compatible recommendation collaborator.
//!
//! One request per recommendation: the prompt plus a compact catalogue digest
//! go out, structured advice (goal, budget, product ids) comes back. The
//! model is asked for bare JSON but wrapped replies happen, so the parser
//! extracts the first JSON object from the reply text.

use std::sync::Arc;

use async_trait::async_trait;
use goalgrocer_core::{Product, ProductId};
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::AiConfig;

const SYSTEM_PROMPT: &str = "You are a grocery shopping assistant for a health-focused \
online store. Given a customer's request and the product catalogue, reply with ONLY a JSON \
object shaped as {\"goal\": string|null, \"budget\": number|null, \
\"recommendedProductIds\": [string], \"reasoning\": string|null}. Pick products that fit \
the customer's dietary goal and budget. Use only product ids from the catalogue.";

/// Errors from the AI collaborator.
#[derive(Debug, Error)]
pub enum AiError {
    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the API.
    #[error("AI API returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body prefix for diagnostics.
        body: String,
    },

    /// The response carried no assistant message.
    #[error("AI response contained no content")]
    MissingContent,

    /// The assistant reply held no parseable JSON object.
    #[error("could not parse AI reply: {0}")]
    Parse(String),
}

/// Structured advice extracted from the model reply.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAdvice {
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub budget: Option<Decimal>,
    #[serde(default)]
    pub recommended_product_ids: Vec<ProductId>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// Source of basket advice.
///
/// The HTTP client below is the production implementation; tests drive the
/// recommendation service with canned advisors instead.
#[async_trait]
pub trait Advisor: Send + Sync {
    /// Ask for basket advice for one prompt against the catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable reply.
    async fn advise(&self, prompt: &str, products: &[Product]) -> Result<AiAdvice, AiError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat-completions client; cheap to clone.
#[derive(Clone)]
pub struct AiClient {
    inner: Arc<AiClientInner>,
}

struct AiClientInner {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl AiClient {
    /// Create a client for the configured endpoint.
    #[must_use]
    pub fn new(config: &AiConfig) -> Self {
        Self {
            inner: Arc::new(AiClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                model: config.model.clone(),
                api_key: config.api_key.expose_secret().to_string(),
            }),
        }
    }
}

#[async_trait]
impl Advisor for AiClient {
    async fn advise(&self, prompt: &str, products: &[Product]) -> Result<AiAdvice, AiError> {
        let user_content = format!(
            "Customer request: {prompt}\n\nCatalogue:\n{}",
            catalogue_digest(products)
        );
        let request = ChatRequest {
            model: &self.inner.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_content,
                },
            ],
            temperature: 0.2,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .inner
            .client
            .post(format!("{}/chat/completions", self.inner.base_url))
            .bearer_auth(&self.inner.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AiError::MissingContent)?;
        debug!(reply_len = content.len(), "AI reply received");

        parse_advice(&content)
    }
}

/// One line per product: the fields the model needs to choose with.
fn catalogue_digest(products: &[Product]) -> String {
    products
        .iter()
        .map(|p| {
            format!(
                "{} | {} | R{} | {}kcal | {}g protein | tags: {} | badges: {} | sold: {}",
                p.id,
                p.name,
                p.price,
                p.calories,
                p.protein,
                p.tags.join(", "),
                p.goal_badges.join(", "),
                p.sold_count,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract and decode the first JSON object in the reply text.
fn parse_advice(content: &str) -> Result<AiAdvice, AiError> {
    let start = content
        .find('{')
        .ok_or_else(|| AiError::Parse("no JSON object in reply".to_owned()))?;
    let end = content
        .rfind('}')
        .ok_or_else(|| AiError::Parse("unterminated JSON object in reply".to_owned()))?;
    if end < start {
        return Err(AiError::Parse("unterminated JSON object in reply".to_owned()));
    }

    serde_json::from_str(&content[start..=end]).map_err(|error| AiError::Parse(error.to_string()))
}
