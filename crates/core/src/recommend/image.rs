//! Image-name matcher.
//!
//! Treats an uploaded file's name as a keyword source: "tuna-salad.png"
//! should surface tuna products. Re-uses the keyword weights of the scoring
//! engine but drops products with no hit at all.

use std::cmp::Ordering;

use crate::models::Product;

use super::MAX_BASKET_SIZE;

/// Match products against the alphanumeric terms of a file name.
///
/// Terms shorter than three characters are ignored; a name that yields no
/// terms (e.g. "a.png") produces an empty result. Only products with a
/// positive score are returned, descending, capped at [`MAX_BASKET_SIZE`].
#[must_use]
pub fn match_image_name(products: &[Product], file_name: &str) -> Vec<Product> {
    let lowered = file_name.to_lowercase();
    let terms: Vec<&str> = lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| t.len() > 2)
        .collect();

    if terms.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, Product)> = products
        .iter()
        .filter_map(|product| {
            let name = product.name.to_lowercase();
            let mut score = 0.0;
            for term in &terms {
                if name.contains(term) {
                    score += 14.0;
                }
                if product
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(term))
                {
                    score += 10.0;
                }
            }
            (score > 0.0).then(|| (score, product.clone()))
        })
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored
        .into_iter()
        .take(MAX_BASKET_SIZE)
        .map(|(_, product)| product)
        .collect()
}
