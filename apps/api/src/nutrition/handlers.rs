//! Axum route handlers for food search and plan nutrient summaries.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::plan::PlanDay;
use crate::nutrition::food_lookup::FoodResult;
use crate::nutrition::totals::{recompute_meal_totals, scale_per_100g, summarize_plan, PlanSummary};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FoodSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    /// Portion size; when set, values are scaled from per-100 g to this many grams.
    #[serde(default)]
    pub grams: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct FoodSearchResponse {
    pub foods: Vec<FoodResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummaryRequest {
    pub plan_days: Vec<PlanDay>,
    /// Recompute each meal's totals from its ingredients before summing.
    #[serde(default)]
    pub recompute: bool,
}

/// GET /api/v1/foods/search?q=&grams=
pub async fn handle_food_search(
    State(state): State<AppState>,
    params: Result<Query<FoodSearchQuery>, QueryRejection>,
) -> Result<Json<FoodSearchResponse>, AppError> {
    let Query(params) = params?;
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(AppError::Validation("q cannot be empty".to_string()));
    }

    let mut foods = state.foods.search(query).await?;
    if let Some(grams) = params.grams.filter(|g| *g > 0.0) {
        for food in &mut foods {
            food.calories = scale_per_100g(food.calories, grams);
            food.protein = scale_per_100g(food.protein, grams);
            food.fat = scale_per_100g(food.fat, grams);
            food.carbs = scale_per_100g(food.carbs, grams);
        }
    }
    Ok(Json(FoodSearchResponse { foods }))
}

/// POST /api/v1/meal-plans/summary
///
/// Per-day and whole-plan nutrient totals for a plan as the client holds it.
pub async fn handle_plan_summary(
    request: Result<Json<PlanSummaryRequest>, JsonRejection>,
) -> Result<Json<PlanSummary>, AppError> {
    let Json(mut request) = request?;
    if request.recompute {
        request
            .plan_days
            .iter_mut()
            .flat_map(|d| d.meals.iter_mut())
            .for_each(recompute_meal_totals);
    }

    Ok(Json(summarize_plan(&request.plan_days)))
}
