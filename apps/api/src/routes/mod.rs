pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::meal_plan::handlers as meal_plan;
use crate::nutrition::handlers as nutrition;
use crate::reports::handlers as reports;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Meal plans
        .route(
            "/api/v1/meal-plans/generate",
            post(meal_plan::handle_generate_meal_plan),
        )
        .route(
            "/api/generate-meal-plan",
            post(meal_plan::handle_generate_meal_plan),
        )
        .route(
            "/api/v1/meal-plans/summary",
            post(nutrition::handle_plan_summary),
        )
        // Food lookup
        .route("/api/v1/foods/search", get(nutrition::handle_food_search))
        // Emails
        .route(
            "/api/v1/reports/compose",
            post(reports::handle_compose_report),
        )
        .route(
            "/api/v1/reminders/compose",
            post(reports::handle_compose_reminders),
        )
        .with_state(state)
}
