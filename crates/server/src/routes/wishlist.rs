//! Wishlist reads and toggles.

use axum::Json;
use axum::extract::State;
use goalgrocer_core::{ProductId, Wishlist};
use serde::Deserialize;

use crate::error::Result;
use crate::extract::CurrentUser;
use crate::state::AppState;

/// `GET /wishlist`
pub async fn get_mine(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<Wishlist> {
    Json(state.catalogue.wishlist(&user.id).await)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub product_id: ProductId,
}

/// `POST /wishlist/toggle`
pub async fn toggle(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<Wishlist>> {
    let wishlist = state
        .catalogue
        .toggle_wishlist(&user.id, &request.product_id)
        .await?;
    Ok(Json(wishlist))
}
