//! Prompt- and image-driven recommendations.

use axum::Json;
use axum::extract::State;
use goalgrocer_core::Product;
use goalgrocer_core::recommend::match_image_name;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::services::Recommendation;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: String,
    /// Explicit goal selection; overrides whatever the prompt implies.
    #[serde(default)]
    pub goal: Option<String>,
    /// Explicit budget selection; overrides whatever the prompt implies.
    #[serde(default)]
    pub budget: Option<Decimal>,
}

/// `POST /recommendations`
pub async fn from_prompt(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> Json<Recommendation> {
    let products = state.catalogue.products().await;
    let recommendation = state
        .recommender
        .recommend(
            &products,
            &request.prompt,
            request.goal.as_deref(),
            request.budget,
        )
        .await;
    Json(recommendation)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    #[serde(default)]
    pub file_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub products: Vec<Product>,
}

/// `POST /recommendations/image`
///
/// Matches the uploaded image's file name against product names and tags; no
/// pixel data is ever inspected.
pub async fn from_image(
    State(state): State<AppState>,
    Json(request): Json<ImageRequest>,
) -> Json<ImageResponse> {
    let products = state.catalogue.products().await;
    Json(ImageResponse {
        products: match_image_name(&products, &request.file_name),
    })
}
