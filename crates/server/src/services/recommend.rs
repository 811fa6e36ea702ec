//! Recommendation service: AI-first with a rules fallback.
//!
//! When an AI collaborator is configured, its advice drives the basket; any
//! AI failure degrades to the local rule engine with a note telling the
//! client which engine answered. Without a configured collaborator the rules
//! run directly. The rules path can never fail.

use std::sync::Arc;

use goalgrocer_core::recommend::{Criteria, parse_prompt, recommend_from_prompt};
use goalgrocer_core::{Product, recommend::build_basket};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use super::ai::Advisor;

/// Which engine produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationSource {
    /// Local rule engine.
    Rules,
    /// AI collaborator.
    Ai,
}

/// A recommendation as returned to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub source: RecommendationSource,
    /// Effective goal, empty when none was selected, advised or parsed.
    pub goal: String,
    pub budget: Option<Decimal>,
    /// Engine-switch note or the advisor's reasoning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// What the local parser extracted from the raw prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<Criteria>,
    pub products: Vec<Product>,
}

/// Recommendation engine front door.
#[derive(Clone)]
pub struct Recommender {
    ai: Option<Arc<dyn Advisor>>,
}

impl Recommender {
    /// Build a recommender; without an advisor every request takes the
    /// rules path.
    #[must_use]
    pub fn new(ai: Option<Arc<dyn Advisor>>) -> Self {
        Self { ai }
    }

    /// Recommend a basket for a prompt, honoring explicit goal/budget
    /// selections over anything advised or parsed.
    pub async fn recommend(
        &self,
        products: &[Product],
        prompt: &str,
        selected_goal: Option<&str>,
        selected_budget: Option<Decimal>,
    ) -> Recommendation {
        let Some(ai) = &self.ai else {
            return rules_recommendation(
                products,
                prompt,
                selected_goal,
                selected_budget,
                Some("AI key not configured, using local recommendation engine.".to_owned()),
            );
        };

        match ai.advise(prompt, products).await {
            Ok(advice) => {
                // The advised ids act as a filter over the catalogue; an
                // empty selection is still an AI answer, not a failure.
                let chosen: Vec<Product> = products
                    .iter()
                    .filter(|p| advice.recommended_product_ids.contains(&p.id))
                    .cloned()
                    .collect();

                // Goal and budget each resolve selected, then advised, then
                // whatever the prompt itself yields.
                let parsed = parse_prompt(prompt);
                let goal = effective_goal(selected_goal, advice.goal.as_deref(), &parsed.goal);
                let budget = selected_budget
                    .filter(|b| *b > Decimal::ZERO)
                    .or_else(|| advice.budget.filter(|b| *b > Decimal::ZERO))
                    .or(parsed.budget);

                let note = advice
                    .reasoning
                    .filter(|reason| !reason.trim().is_empty())
                    .unwrap_or_else(|| "Recommendations generated by AI model.".to_owned());

                Recommendation {
                    source: RecommendationSource::Ai,
                    goal,
                    budget,
                    note: Some(note),
                    parsed: Some(parsed),
                    products: build_basket(&chosen, budget),
                }
            }
            Err(error) => {
                warn!(%error, "AI recommendation failed, falling back to rules");
                rules_recommendation(
                    products,
                    prompt,
                    selected_goal,
                    selected_budget,
                    Some("AI unavailable, switched to local recommendation engine.".to_owned()),
                )
            }
        }
    }
}

fn effective_goal(selected: Option<&str>, advised: Option<&str>, parsed: &str) -> String {
    [selected, advised, Some(parsed)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|goal| !goal.is_empty())
        .unwrap_or_default()
        .to_owned()
}

fn rules_recommendation(
    products: &[Product],
    prompt: &str,
    selected_goal: Option<&str>,
    selected_budget: Option<Decimal>,
    note: Option<String>,
) -> Recommendation {
    let rec = recommend_from_prompt(products, prompt, selected_goal, selected_budget);
    Recommendation {
        source: RecommendationSource::Rules,
        goal: rec.goal,
        budget: rec.budget,
        note,
        parsed: Some(rec.parsed),
        products: rec.products,
    }
}
