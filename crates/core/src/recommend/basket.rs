//! Greedy budget-constrained basket selection.

use rust_decimal::Decimal;

use crate::models::Product;

/// Upper bound on basket size.
pub const MAX_BASKET_SIZE: usize = 8;

/// Pick a basket from an already-ranked product list.
///
/// Without a positive budget this is simply the first
/// `min(MAX_BASKET_SIZE, n)` products. With one, the ranked list is scanned
/// once in order and a product is taken only when it still fits under the
/// budget; products that would overflow are skipped and never reconsidered.
/// Greedy by intent: with a few dozen products the O(n) approximation is
/// preferred over an optimal knapsack.
#[must_use]
pub fn build_basket(ranked: &[Product], budget: Option<Decimal>) -> Vec<Product> {
    let Some(max) = budget.filter(|b| *b > Decimal::ZERO) else {
        return ranked.iter().take(MAX_BASKET_SIZE).cloned().collect();
    };

    let mut picked = Vec::new();
    let mut spent = Decimal::ZERO;

    for product in ranked {
        if spent + product.price > max {
            continue;
        }
        spent += product.price;
        picked.push(product.clone());
        if picked.len() >= MAX_BASKET_SIZE {
            break;
        }
    }

    picked
}
