//! Rule-based recommendation engine.
//!
//! A free-text goal/budget prompt is parsed into [`Criteria`], the catalogue
//! is ranked against it with weighted heuristics, and a budget-constrained
//! basket is greedily selected from the ranking. Every function here is pure:
//! same inputs, same outputs, no side effects and no failure states -
//! malformed input degrades to empty criteria, never to an error.

mod basket;
mod image;
mod prompt;
mod score;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Product;

pub use basket::{MAX_BASKET_SIZE, build_basket};
pub use image::match_image_name;
pub use prompt::{Criteria, parse_prompt};
pub use score::{rank_products, score_product};

/// Goal label recognized for weight-loss prompts.
pub const GOAL_WEIGHT_LOSS: &str = "Weight Loss";
/// Goal label recognized for maintenance prompts.
pub const GOAL_MAINTENANCE: &str = "Maintenance";

/// Outcome of the local rule-based recommendation pipeline.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleRecommendation {
    /// Effective goal after merging the explicit selection with the parse.
    pub goal: String,
    /// Effective budget after merging the explicit selection with the parse.
    pub budget: Option<Decimal>,
    /// What the parser extracted from the raw prompt.
    pub parsed: Criteria,
    /// The recommended basket, ranked and budget-constrained.
    pub products: Vec<Product>,
}

/// Run the full local pipeline: parse, rank, build a basket.
///
/// An explicitly selected goal overrides the parsed goal, and an explicitly
/// selected positive budget overrides the parsed budget; either falls back to
/// whatever the prompt yielded.
#[must_use]
pub fn recommend_from_prompt(
    products: &[Product],
    prompt: &str,
    selected_goal: Option<&str>,
    selected_budget: Option<Decimal>,
) -> RuleRecommendation {
    let parsed = parse_prompt(prompt);

    let goal = match selected_goal {
        Some(g) if !g.trim().is_empty() => g.trim().to_owned(),
        _ => parsed.goal.clone(),
    };
    let budget = selected_budget
        .filter(|b| *b > Decimal::ZERO)
        .or(parsed.budget);

    let criteria = Criteria {
        goal: goal.clone(),
        budget,
        keywords: parsed.keywords.clone(),
    };
    let ranked = rank_products(products, &criteria);

    RuleRecommendation {
        goal,
        budget,
        parsed,
        products: build_basket(&ranked, budget),
    }
}
