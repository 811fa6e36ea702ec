//! Weighted heuristic scoring engine.

use std::cmp::Ordering;

use crate::models::Product;

use super::{Criteria, GOAL_WEIGHT_LOSS};

/// Bonus when a product carries the active goal badge.
const GOAL_BADGE_BONUS: f64 = 30.0;
/// Bonus per keyword found in the product name.
const NAME_KEYWORD_BONUS: f64 = 14.0;
/// Bonus per keyword found in any product tag.
const TAG_KEYWORD_BONUS: f64 = 10.0;

/// Compute a product's score against the criteria.
///
/// All terms are additive. Products that do not carry the active goal badge
/// still receive the calorie/protein shaping terms for that goal (soft
/// scoring); only the flat badge bonus distinguishes them.
#[must_use]
#[allow(clippy::cast_precision_loss)] // sold counts stay far below 2^52
pub fn score_product(product: &Product, criteria: &Criteria) -> f64 {
    let mut score = 0.0;

    if criteria.goal.is_empty() {
        score += product.protein * 0.2;
        score += (300.0 - product.calories).max(0.0) * 0.05;
    } else {
        if product.goal_badges.iter().any(|b| b == &criteria.goal) {
            score += GOAL_BADGE_BONUS;
        }
        if criteria.goal == GOAL_WEIGHT_LOSS {
            score += (250.0 - product.calories).max(0.0) * 0.08;
            score += product.protein * 0.5;
        } else {
            score += (500.0 - (380.0 - product.calories).abs()).max(0.0) * 0.04;
            score += product.protein * 0.35;
        }
    }

    let name = product.name.to_lowercase();
    for keyword in &criteria.keywords {
        if name.contains(keyword) {
            score += NAME_KEYWORD_BONUS;
        }
        if product
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(keyword))
        {
            score += TAG_KEYWORD_BONUS;
        }
    }

    score + product.sold_count as f64 * 0.1
}

/// Rank products descending by score.
///
/// Pure and deterministic; tie order is whatever the underlying stable sort
/// produces and is not part of the contract.
#[must_use]
pub fn rank_products(products: &[Product], criteria: &Criteria) -> Vec<Product> {
    let mut scored: Vec<(f64, Product)> = products
        .iter()
        .map(|product| (score_product(product, criteria), product.clone()))
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.into_iter().map(|(_, product)| product).collect()
}
