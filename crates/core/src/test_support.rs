//! Shared fixtures for unit tests.

use rust_decimal::Decimal;

use crate::models::Product;
use crate::types::{CategoryId, ProductId};

/// A product with the given id and name and neutral everything else.
pub fn product_named(id: &str, name: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Decimal::ZERO,
        cost: Decimal::ZERO,
        category_id: CategoryId::new("cat-test"),
        tags: Vec::new(),
        calories: 0.0,
        protein: 0.0,
        goal_badges: Vec::new(),
        image_url: String::new(),
        is_promotion: false,
        views_count: 0,
        sold_count: 0,
    }
}

/// Set calories and protein.
pub fn with_nutrition(mut product: Product, calories: f64, protein: f64) -> Product {
    product.calories = calories;
    product.protein = protein;
    product
}

/// Set the price.
pub fn priced(mut product: Product, price: Decimal) -> Product {
    product.price = price;
    product
}
