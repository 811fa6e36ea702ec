//! Back-office routes; every handler requires the admin role.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use goalgrocer_core::reports::Reports;
use goalgrocer_core::{
    Category, CategoryId, Order, Product, ProductId, ProductInput, SafeUser,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::extract::AdminUser;
use crate::state::AppState;

/// `PUT /admin/products`
pub async fn upsert_product(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>> {
    let product = input.normalize();
    if product.name.is_empty() {
        return Err(AppError::BadRequest("Product name is required.".to_owned()));
    }
    state.catalogue.upsert_product(product.clone()).await;
    Ok(Json(product))
}

/// `DELETE /admin/products/{id}`
pub async fn delete_product(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.catalogue.delete_product(&ProductId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    #[serde(default)]
    pub id: Option<CategoryId>,
    #[serde(default)]
    pub name: String,
}

/// `PUT /admin/categories`
pub async fn upsert_category(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(input): Json<CategoryInput>,
) -> Result<Json<Category>> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Category name is required.".to_owned()));
    }
    let category = Category {
        id: input.id.unwrap_or_else(CategoryId::generate),
        name: name.to_owned(),
    };
    state.catalogue.upsert_category(category.clone()).await;
    Ok(Json(category))
}

/// `DELETE /admin/categories/{id}`
pub async fn delete_category(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.catalogue.delete_category(&CategoryId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
    /// Payment type filter; the `All` sentinel passes everything.
    #[serde(default)]
    pub payment: Option<String>,
    /// Status filter; the `All` sentinel passes everything.
    #[serde(default)]
    pub status: Option<String>,
}

fn filter_active(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != "All")
}

/// `GET /admin/orders`
pub async fn orders(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(query): Query<OrderQuery>,
) -> Json<Vec<Order>> {
    let mut orders = state.catalogue.orders().await;
    if let Some(payment) = filter_active(query.payment.as_deref()) {
        orders.retain(|o| o.payment_type.as_str() == payment);
    }
    if let Some(status) = filter_active(query.status.as_deref()) {
        orders.retain(|o| o.status.as_str() == status);
    }
    Json(orders)
}

/// `GET /admin/users`
pub async fn users(State(state): State<AppState>, AdminUser(_): AdminUser) -> Json<Vec<SafeUser>> {
    Json(state.catalogue.users_safe().await)
}

/// `GET /admin/reports`
pub async fn reports(State(state): State<AppState>, AdminUser(_): AdminUser) -> Json<Reports> {
    Json(state.catalogue.reports().await)
}
