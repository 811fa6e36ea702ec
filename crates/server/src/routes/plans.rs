//! Editorial meal-plan content.

use axum::Json;
use goalgrocer_core::plans::{GoalPlanCard, WeeklyPlan, goal_plan_cards, weekly_plans};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlansResponse {
    cards: Vec<GoalPlanCard>,
    plans: Vec<WeeklyPlan>,
}

/// `GET /meal-plans`
pub async fn list() -> Json<MealPlansResponse> {
    Json(MealPlansResponse {
        cards: goal_plan_cards(),
        plans: weekly_plans(),
    })
}
