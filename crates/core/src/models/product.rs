//! Product entity and admin upsert input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, ProductId};

/// A catalogue product.
///
/// `views_count` and `sold_count` are monotonically non-decreasing counters;
/// they are only ever incremented (product detail views and order placement
/// respectively).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub cost: Decimal,
    pub category_id: CategoryId,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub goal_badges: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_promotion: bool,
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub sold_count: u64,
}

/// Admin form input for creating or editing a product.
///
/// Tags and goal badges may arrive either as proper lists or as a single
/// comma-separated string from a free-text field; [`ProductInput::normalize`]
/// accepts both.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub cost: Decimal,
    pub category_id: CategoryId,
    #[serde(default)]
    pub tags: ListOrCsv,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub goal_badges: ListOrCsv,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_promotion: bool,
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub sold_count: u64,
}

impl ProductInput {
    /// Turn the form input into a well-formed [`Product`].
    ///
    /// Missing ids get a freshly generated one; the name is trimmed; negative
    /// numeric inputs are clamped to zero; comma-separated tag/badge strings
    /// are split and emptied entries dropped.
    #[must_use]
    pub fn normalize(self) -> Product {
        Product {
            id: self.id.unwrap_or_else(ProductId::generate),
            name: self.name.trim().to_owned(),
            price: self.price.max(Decimal::ZERO),
            cost: self.cost.max(Decimal::ZERO),
            category_id: self.category_id,
            tags: self.tags.into_list(),
            calories: self.calories.max(0.0),
            protein: self.protein.max(0.0),
            goal_badges: self.goal_badges.into_list(),
            image_url: self.image_url,
            is_promotion: self.is_promotion,
            views_count: self.views_count,
            sold_count: self.sold_count,
        }
    }
}

/// Either a JSON list of strings or one comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListOrCsv {
    List(Vec<String>),
    Csv(String),
}

impl Default for ListOrCsv {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl ListOrCsv {
    /// Collapse into a list of trimmed, non-empty entries.
    #[must_use]
    pub fn into_list(self) -> Vec<String> {
        match self {
            Self::List(items) => items
                .into_iter()
                .map(|item| item.trim().to_owned())
                .filter(|item| !item.is_empty())
                .collect(),
            Self::Csv(text) => text
                .split(',')
                .map(|item| item.trim().to_owned())
                .filter(|item| !item.is_empty())
                .collect(),
        }
    }
}
