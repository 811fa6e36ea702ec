//! Static weekly meal plans per dietary goal.
//!
//! The plans are editorial content, compiled in rather than stored: three
//! goals, seven days each, breakfast/lunch/dinner. Each plan also lists the
//! catalogue products covering its ingredients so the storefront can offer a
//! one-click basket.

use serde::Serialize;

use crate::recommend::{GOAL_MAINTENANCE, GOAL_WEIGHT_LOSS};
use crate::types::ProductId;

/// Goal label for the lean-muscle plan (present in plan data only; the
/// prompt parser does not recognize it).
pub const GOAL_LEAN_MUSCLE: &str = "Lean Muscle";

const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Summary card shown per goal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlanCard {
    pub goal: &'static str,
    pub summary: &'static str,
}

/// One day of a weekly plan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealDay {
    pub day: &'static str,
    pub breakfast: &'static str,
    pub lunch: &'static str,
    pub dinner: &'static str,
}

/// A full weekly plan for one goal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub goal: &'static str,
    pub days: Vec<MealDay>,
    /// Catalogue products covering the plan's ingredients.
    pub ingredient_product_ids: Vec<ProductId>,
}

/// The per-goal summary cards, in display order.
#[must_use]
pub fn goal_plan_cards() -> Vec<GoalPlanCard> {
    vec![
        GoalPlanCard {
            goal: GOAL_WEIGHT_LOSS,
            summary: "Lower-calorie, high-protein week plan for fat loss.",
        },
        GoalPlanCard {
            goal: GOAL_MAINTENANCE,
            summary: "Balanced calories and protein for healthy maintenance.",
        },
        GoalPlanCard {
            goal: GOAL_LEAN_MUSCLE,
            summary: "Higher-protein meals to support lean muscle goals.",
        },
    ]
}

/// All weekly plans, in the same order as [`goal_plan_cards`].
#[must_use]
pub fn weekly_plans() -> Vec<WeeklyPlan> {
    vec![
        plan(
            GOAL_WEIGHT_LOSS,
            [
                ("Greek Yogurt + Oats + Spinach Smoothie", "Chicken Breast Bowl with Mixed Veggies", "Tuna Wrap + Side Salad"),
                ("Eggs + Spinach + Low Fat Milk", "Cottage Cheese Veg Bowl", "Chickpea & Sweet Potato Plate"),
                ("Greek Yogurt + Oats", "Chicken Breast + Veggie Stir Fry", "Tuna + Avocado Protein Wrap"),
                ("Egg White Omelette + Spinach", "Chickpea Protein Salad", "Mixed Veggies + Cottage Cheese"),
                ("Low Fat Milk Oats Bowl", "Chicken Breast + Sweet Potato", "Tuna + Spinach + Avocado"),
                ("Greek Yogurt + Peanut Butter drizzle", "Veggie Bowl + Eggs", "Protein Wrap with Chicken"),
                ("Eggs + Oats", "Chickpea + Veg Bowl", "Cottage Cheese + Spinach + Sweet Potato"),
            ],
            &["p1", "p2", "p4", "p5", "p6", "p7", "p8", "p12", "p19", "p20"],
        ),
        plan(
            GOAL_MAINTENANCE,
            [
                ("Oats + Low Fat Milk + Eggs", "Lean Beef + Brown Rice + Veggies", "Salmon Fillets + Quinoa"),
                ("Greek Yogurt + Oats + Avocado", "Chicken + Brown Rice Bowl", "Peanut Butter Protein Wrap + Salad"),
                ("Eggs + Sweet Potato", "Lean Beef + Veggies", "Salmon + Quinoa + Spinach"),
                ("Oats + Whey Protein", "Chicken + Avocado Wrap", "Chickpeas + Brown Rice + Veggies"),
                ("Greek Yogurt + Oats", "Beef Mince + Sweet Potato", "Salmon + Spinach + Quinoa"),
                ("Eggs + Low Fat Milk", "Chicken Bowl + Avocado", "Cottage Cheese + Protein Wrap + Veggies"),
                ("Oats + Peanut Butter", "Tuna + Brown Rice", "Lean Beef + Veggies + Quinoa"),
            ],
            &["p1", "p2", "p3", "p6", "p7", "p9", "p10", "p11", "p13", "p15", "p18"],
        ),
        plan(
            GOAL_LEAN_MUSCLE,
            [
                ("Whey Shake + Oats + Eggs", "Chicken Breast + Brown Rice + Avocado", "Salmon + Sweet Potato + Spinach"),
                ("Greek Yogurt + Peanut Butter + Oats", "Lean Beef + Quinoa", "Chicken Protein Wrap + Cottage Cheese"),
                ("Eggs + Low Fat Milk + Oats", "Salmon + Brown Rice", "Lean Beef + Veggie Bowl"),
                ("Whey Shake + Eggs", "Chicken + Sweet Potato", "Salmon + Quinoa + Avocado"),
                ("Greek Yogurt + Oats", "Beef Mince + Brown Rice", "Chicken + Cottage Cheese + Veggies"),
                ("Whey + Oats + Peanut Butter", "Salmon + Avocado Wrap", "Lean Beef + Sweet Potato"),
                ("Eggs + Oats + Milk", "Chicken + Brown Rice + Veggies", "Salmon + Quinoa"),
            ],
            &["p1", "p2", "p3", "p6", "p7", "p9", "p10", "p11", "p13", "p15", "p17"],
        ),
    ]
}

fn plan(
    goal: &'static str,
    meals: [(&'static str, &'static str, &'static str); 7],
    ingredient_ids: &[&str],
) -> WeeklyPlan {
    WeeklyPlan {
        goal,
        days: DAYS
            .into_iter()
            .zip(meals)
            .map(|(day, (breakfast, lunch, dinner))| MealDay {
                day,
                breakfast,
                lunch,
                dinner,
            })
            .collect(),
        ingredient_product_ids: ingredient_ids.iter().map(|id| ProductId::new(*id)).collect(),
    }
}
