//! Meal Plan Generation — orchestrates the batched pipeline.
//!
//! Flow: plan_windows → for each window (sequentially):
//!       build_window_prompt → model call → normalize_response → decode
//!       → assemble_plan over all windows.
//!
//! Any window failure aborts the run. No partial plan is ever returned.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use crate::ids::IdGenerator;
use crate::llm_client::{LlmError, TextGenerator};
use crate::meal_plan::assembler::{assemble_plan, RawDay};
use crate::meal_plan::batching::{plan_windows, Window};
use crate::meal_plan::normalize::{normalize_response, preview, ERROR_PREVIEW_CHARS};
use crate::meal_plan::prompts::build_window_prompt;
use crate::models::plan::PlanDay;

/// Output budget for one window's model call.
pub const WINDOW_MAX_OUTPUT_TOKENS: u32 = 8000;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Meal plan generation failed for the window starting at day {start_day}: {source}")]
    Upstream {
        start_day: u32,
        #[source]
        source: LlmError,
    },

    #[error(
        "Could not parse the meal plan for the window starting at day {start_day}: {message}. \
        Response began with: {preview}"
    )]
    Decode {
        start_day: u32,
        message: String,
        preview: String,
    },

    #[error(
        "Meal plan for the window starting at day {start_day} has {returned} days, expected {expected}"
    )]
    ShortWindow {
        start_day: u32,
        expected: u32,
        returned: u32,
    },
}

impl GenerationError {
    pub fn start_day(&self) -> u32 {
        match self {
            GenerationError::Upstream { start_day, .. } => *start_day,
            GenerationError::Decode { start_day, .. } => *start_day,
            GenerationError::ShortWindow { start_day, .. } => *start_day,
        }
    }
}

/// A validated generation request. `days` is already capped.
#[derive(Debug, Clone)]
pub struct MealPlanRequest {
    pub goal: String,
    pub days: u32,
    pub start_date: NaiveDate,
}

/// Runs the whole pipeline and returns `request.days` assembled days.
pub async fn generate_meal_plan(
    llm: &dyn TextGenerator,
    ids: &dyn IdGenerator,
    batch_size: u32,
    request: &MealPlanRequest,
) -> Result<Vec<PlanDay>, GenerationError> {
    let windows = plan_windows(request.days, batch_size, request.start_date);
    info!(
        "Generating {}-day meal plan from {} in {} windows",
        request.days,
        request.start_date,
        windows.len()
    );

    let mut raw_days: Vec<RawDay> = Vec::with_capacity(request.days as usize);
    for window in &windows {
        let days = generate_window(llm, &request.goal, window).await?;
        raw_days.extend(fit_to_window(days, window)?);
    }

    let plan = assemble_plan(raw_days, request.start_date, ids);
    info!("Assembled meal plan with {} days", plan.len());
    Ok(plan)
}

/// One model call plus normalization and decode for a single window.
async fn generate_window(
    llm: &dyn TextGenerator,
    goal: &str,
    window: &Window,
) -> Result<Vec<RawDay>, GenerationError> {
    info!(
        "Generating days {}-{} ({} days)",
        window.start_day,
        window.end_day(),
        window.days
    );

    let prompt = build_window_prompt(goal, window);
    let raw = llm
        .generate(&prompt, WINDOW_MAX_OUTPUT_TOKENS)
        .await
        .map_err(|source| GenerationError::Upstream {
            start_day: window.start_day,
            source,
        })?;

    parse_window_response(&raw, window.start_day)
}

/// Extra days are dropped; a short window fails, since later windows are
/// already dated from where this one was told to end.
fn fit_to_window(mut days: Vec<RawDay>, window: &Window) -> Result<Vec<RawDay>, GenerationError> {
    let returned = days.len() as u32;
    if returned < window.days {
        return Err(GenerationError::ShortWindow {
            start_day: window.start_day,
            expected: window.days,
            returned,
        });
    }
    if returned > window.days {
        warn!(
            "Window at day {} asked for {} days, model returned {}; extra days dropped",
            window.start_day, window.days, returned
        );
        days.truncate(window.days as usize);
    }
    Ok(days)
}

/// Normalizes and decodes one window's raw text.
pub fn parse_window_response(raw: &str, start_day: u32) -> Result<Vec<RawDay>, GenerationError> {
    let cleaned = normalize_response(raw);
    serde_json::from_str::<Vec<RawDay>>(&cleaned).map_err(|e| GenerationError::Decode {
        start_day,
        message: e.to_string(),
        preview: preview(&cleaned, ERROR_PREVIEW_CHARS),
    })
}
