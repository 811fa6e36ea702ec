//! Product browsing: filtered listing and detail views.

use axum::Json;
use axum::extract::{Path, Query, State};
use goalgrocer_core::{Product, ProductId};
use serde::Deserialize;

use crate::error::Result;
use crate::state::AppState;

/// Listing sort orders. `Relevance` keeps catalogue order.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSort {
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    TopSold,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Case-insensitive substring match on name and tags.
    #[serde(default)]
    pub search: Option<String>,
    /// Category id; the `All` sentinel passes everything.
    #[serde(default)]
    pub category: Option<String>,
    /// Only promotion-flagged products when true.
    #[serde(default)]
    pub promotion: Option<bool>,
    #[serde(default)]
    pub sort: ProductSort,
}

/// `GET /products`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<Vec<Product>> {
    let mut products = state.catalogue.products().await;

    if let Some(search) = query.search.as_deref().map(str::trim)
        && !search.is_empty()
    {
        let needle = search.to_lowercase();
        products.retain(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        });
    }
    if let Some(category) = query.category.as_deref().map(str::trim)
        && !category.is_empty()
        && category != "All"
    {
        products.retain(|p| p.category_id.as_str() == category);
    }
    if query.promotion == Some(true) {
        products.retain(|p| p.is_promotion);
    }

    match query.sort {
        ProductSort::Relevance => {}
        ProductSort::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        ProductSort::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        ProductSort::TopSold => products.sort_by(|a, b| b.sold_count.cmp(&a.sold_count)),
    }

    Json(products)
}

/// `GET /products/{id}`
///
/// A detail fetch counts as a view.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let product = state
        .catalogue
        .record_product_view(&ProductId::new(id))
        .await?;
    Ok(Json(product))
}
