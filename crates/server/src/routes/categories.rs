//! Category browsing.

use axum::Json;
use axum::extract::State;
use goalgrocer_core::Category;

use crate::state::AppState;

/// `GET /categories`
pub async fn list(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalogue.categories().await)
}
