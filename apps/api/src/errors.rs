use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::meal_plan::generator::GenerationError;
use crate::nutrition::food_lookup::FoodLookupError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Body shape: `{ "error": "<message>", "code": "<CODE>" }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Food lookup error: {0}")]
    FoodLookup(#[from] FoodLookupError),
}

// Extractor rejections are client errors; they use the same JSON body as everything else.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Generation(e) => {
                tracing::error!("Meal plan generation error: {e}");
                // Message names the failing window; the plan builder shows it to the consultant.
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_ERROR",
                    e.to_string(),
                )
            }
            AppError::FoodLookup(e) => {
                tracing::error!("Food lookup error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "FOOD_LOOKUP_ERROR",
                    "Food search failed. Try again later.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}
