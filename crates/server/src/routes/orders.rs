//! Checkout and order history.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use goalgrocer_core::{Order, PaymentType};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::extract::CurrentUser;
use crate::state::AppState;
use crate::store::CheckoutItem;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub items: Vec<CheckoutItem>,
    #[serde(default)]
    pub payment_type: PaymentType,
}

/// `POST /checkout`
pub async fn checkout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<Order>)> {
    if request.items.is_empty() {
        return Err(AppError::BadRequest("Cart is empty.".to_owned()));
    }
    let order = state
        .catalogue
        .create_order(&user.id, &request.items, request.payment_type)
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// `GET /orders`
pub async fn list_mine(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<Vec<Order>> {
    Json(state.catalogue.orders_for_user(&user.id).await)
}
