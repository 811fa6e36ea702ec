//! Free-text prompt parser.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{GOAL_MAINTENANCE, GOAL_WEIGHT_LOSS};

/// Filler words dropped from extracted keywords.
const STOP_WORDS: &[&str] = &[
    "i", "a", "the", "for", "to", "my", "with", "and", "or", "under", "want", "looking", "need",
    "good", "best",
];

/// Synonyms that flag a weight-loss goal. Substring matches, like the
/// original vocabulary.
const WEIGHT_LOSS_MARKERS: &[&str] = &["lose", "loss", "cut", "lean"];

/// Synonyms that flag a maintenance goal. Checked second, so a prompt
/// matching both vocabularies resolves to maintenance.
const MAINTENANCE_MARKERS: &[&str] = &["maintain", "maintenance", "balanced", "steady"];

/// Budget token: an optional `R` currency marker, then either a number with
/// an optional fraction followed by a `k` multiplier, or a plain 2-to-5-digit
/// amount. Leftmost match wins.
static BUDGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // pattern is a literal, checked by tests
    Regex::new(r"(?i)(?:r\s*)?(?:(\d{1,5}(?:\.\d+)?)\s*k|(\d{2,5}))").unwrap()
});

/// Structured criteria extracted from a free-text prompt.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    /// Detected goal, empty string when no vocabulary matched.
    pub goal: String,
    /// Detected budget in currency units.
    pub budget: Option<Decimal>,
    /// Lowercased keywords, order and duplicates preserved.
    pub keywords: Vec<String>,
}

/// Parse a free-text prompt into goal, budget and keywords.
///
/// Never fails: an empty or meaningless prompt yields empty criteria. Goal
/// detection is case-insensitive substring matching against two fixed
/// vocabularies, with the maintenance vocabulary evaluated second and
/// winning when both match. Budget detection takes the first numeric token,
/// multiplying by 1000 when it carries a `k` suffix (a fractional mantissa
/// is accepted with `k`, so "1.5k" reads as 1500). Keywords are the
/// lowercased alphanumeric runs longer than two characters, minus a fixed
/// stop-word set.
#[must_use]
pub fn parse_prompt(prompt: &str) -> Criteria {
    let text = prompt.to_lowercase();

    let budget = BUDGET_RE.captures(&text).and_then(|caps| {
        caps.get(1).map_or_else(
            || caps.get(2).and_then(|m| m.as_str().parse::<Decimal>().ok()),
            |m| {
                m.as_str()
                    .parse::<Decimal>()
                    .ok()
                    .map(|v| v * Decimal::from(1000))
            },
        )
    });

    let mut goal = String::new();
    if WEIGHT_LOSS_MARKERS.iter().any(|m| text.contains(m)) {
        goal = GOAL_WEIGHT_LOSS.to_owned();
    }
    if MAINTENANCE_MARKERS.iter().any(|m| text.contains(m)) {
        goal = GOAL_MAINTENANCE.to_owned();
    }

    let keywords = text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| w.len() > 2 && !STOP_WORDS.contains(w))
        .map(str::to_owned)
        .collect();

    Criteria {
        goal,
        budget,
        keywords,
    }
}
