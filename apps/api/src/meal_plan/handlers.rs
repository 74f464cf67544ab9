//! Axum route handlers for the Meal Plan API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::meal_plan::batching::cap_days;
use crate::meal_plan::generator::{generate_meal_plan, MealPlanRequest};
use crate::models::plan::PlanDay;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Every field is optional at the serde level so that a missing field is a
/// 400 from `validate`, not a 422 from the JSON extractor.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealPlanRequest {
    #[serde(default)]
    pub program_goal: Option<String>,
    /// Integer, integral float, or numeric string; checked in `validate`.
    #[serde(default)]
    pub number_of_days: Option<Value>,
    #[serde(default)]
    pub start_date: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealPlanResponse {
    pub plan_days: Vec<PlanDay>,
}

impl GenerateMealPlanRequest {
    /// Checks required fields and caps the day count.
    pub fn validate(self) -> Result<MealPlanRequest, AppError> {
        let goal = self
            .program_goal
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty());

        let (goal, requested) = match (goal, self.number_of_days) {
            (Some(goal), Some(days)) if !days.is_null() => (goal, days),
            _ => {
                return Err(AppError::Validation(
                    "Missing programGoal or numberOfDays".to_string(),
                ))
            }
        };

        let requested = day_count(&requested)
            .filter(|days| *days > 0)
            .ok_or_else(|| {
                AppError::Validation("numberOfDays must be a positive integer".to_string())
            })?;

        let start_date = self
            .start_date
            .as_deref()
            .ok_or_else(|| AppError::Validation("Missing startDate".to_string()))
            .and_then(|raw| {
                parse_start_date(raw).ok_or_else(|| {
                    AppError::Validation(format!(
                        "startDate must be an ISO date (YYYY-MM-DD), got '{raw}'"
                    ))
                })
            })?;

        let days = cap_days(u32::try_from(requested).unwrap_or(u32::MAX));
        if i64::from(days) < requested {
            info!("numberOfDays {} capped to {}", requested, days);
        }

        Ok(MealPlanRequest {
            goal,
            days,
            start_date,
        })
    }
}

/// `7`, `7.0` and `"7"` all count as seven days; fractions and other text do not.
fn day_count(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (date taken in UTC).
fn parse_start_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/meal-plans/generate
///
/// Generates a multi-day meal plan for a program goal in sequential windows.
/// Returns every day or nothing: a failed window fails the whole request.
pub async fn handle_generate_meal_plan(
    State(state): State<AppState>,
    body: Result<Json<GenerateMealPlanRequest>, JsonRejection>,
) -> Result<Json<GenerateMealPlanResponse>, AppError> {
    let Json(body) = body?;
    let request = body.validate()?;

    let plan_days = generate_meal_plan(
        state.llm.as_ref(),
        state.ids.as_ref(),
        state.config.meal_plan_batch_size,
        &request,
    )
    .await?;

    Ok(Json(GenerateMealPlanResponse { plan_days }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(goal: Option<&str>, days: Option<i64>, start: Option<&str>) -> GenerateMealPlanRequest {
        GenerateMealPlanRequest {
            program_goal: goal.map(String::from),
            number_of_days: days.map(Value::from),
            start_date: start.map(String::from),
        }
    }

    fn expect_validation(result: Result<MealPlanRequest, AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_request() {
        let request = body(Some(" Weight loss "), Some(7), Some("2024-01-01"))
            .validate()
            .unwrap();
        assert_eq!(request.goal, "Weight loss");
        assert_eq!(request.days, 7);
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_missing_goal_or_days() {
        let msg = expect_validation(body(None, Some(7), Some("2024-01-01")).validate());
        assert_eq!(msg, "Missing programGoal or numberOfDays");
        expect_validation(body(Some("   "), Some(7), Some("2024-01-01")).validate());
        expect_validation(body(Some("Weight loss"), None, Some("2024-01-01")).validate());
    }

    #[test]
    fn test_non_positive_days_rejected() {
        expect_validation(body(Some("Weight loss"), Some(0), Some("2024-01-01")).validate());
        expect_validation(body(Some("Weight loss"), Some(-3), Some("2024-01-01")).validate());
    }

    #[test]
    fn test_days_capped_at_28() {
        let request = body(Some("Weight loss"), Some(40), Some("2024-01-01"))
            .validate()
            .unwrap();
        assert_eq!(request.days, 28);

        let request = body(Some("Weight loss"), Some(i64::MAX), Some("2024-01-01"))
            .validate()
            .unwrap();
        assert_eq!(request.days, 28);
    }

    #[test]
    fn test_start_date_required_and_parsed() {
        let msg = expect_validation(body(Some("Weight loss"), Some(3), None).validate());
        assert_eq!(msg, "Missing startDate");

        let msg = expect_validation(body(Some("Weight loss"), Some(3), Some("01/02/2024")).validate());
        assert!(msg.contains("01/02/2024"));
    }

    #[test]
    fn test_rfc3339_start_date_uses_utc_date() {
        assert_eq!(
            parse_start_date("2024-01-01T23:30:00-02:00"),
            NaiveDate::from_ymd_opt(2024, 1, 2)
        );
        assert_eq!(
            parse_start_date("2024-01-01T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let request: GenerateMealPlanRequest = serde_json::from_str(
            r#"{"programGoal": "Weight loss", "numberOfDays": 7, "startDate": "2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(request.number_of_days, Some(Value::from(7)));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_day_count_accepts_numeric_forms() {
        for raw in [r#"7"#, r#"7.0"#, r#""7""#, r#"" 7 ""#] {
            let request: GenerateMealPlanRequest = serde_json::from_str(&format!(
                r#"{{"programGoal": "Weight loss", "numberOfDays": {raw}, "startDate": "2024-01-01"}}"#
            ))
            .unwrap();
            assert_eq!(request.validate().unwrap().days, 7, "numberOfDays {raw}");
        }
    }

    #[test]
    fn test_day_count_rejects_non_integers() {
        for raw in [r#"7.5"#, r#""seven""#, r#"true"#, r#"[7]"#] {
            let request: GenerateMealPlanRequest = serde_json::from_str(&format!(
                r#"{{"programGoal": "Weight loss", "numberOfDays": {raw}, "startDate": "2024-01-01"}}"#
            ))
            .unwrap();
            let msg = expect_validation(request.validate());
            assert_eq!(msg, "numberOfDays must be a positive integer", "numberOfDays {raw}");
        }
    }

    #[test]
    fn test_null_day_count_is_missing() {
        let request: GenerateMealPlanRequest = serde_json::from_str(
            r#"{"programGoal": "Weight loss", "numberOfDays": null, "startDate": "2024-01-01"}"#,
        )
        .unwrap();
        let msg = expect_validation(request.validate());
        assert_eq!(msg, "Missing programGoal or numberOfDays");
    }
}
