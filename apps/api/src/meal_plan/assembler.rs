//! Plan Assembler — turns decoded model days into persisted-shape `PlanDay`s.
//!
//! Every field the model emits is a hint. Day numbers, dates and ids are
//! recomputed locally; names and numeric leaf values are kept as given.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::ids::IdGenerator;
use crate::meal_plan::batching::date_for_offset;
use crate::models::plan::{Ingredient, Meal, MealSlot, PlanDay, MEAL_SLOTS};

// ────────────────────────────────────────────────────────────────────────────
// Decoded model output
// ────────────────────────────────────────────────────────────────────────────

/// A day as the model returned it. `day` and `date` are ignored on purpose.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDay {
    #[serde(default)]
    pub meals: Option<Vec<RawMeal>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeal {
    #[serde(default)]
    pub slot: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<RawIngredient>>,
    #[serde(default)]
    pub total_calories: Option<f64>,
    #[serde(default)]
    pub total_protein: Option<f64>,
    #[serde(default)]
    pub total_fat: Option<f64>,
    #[serde(default)]
    pub total_carbs: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawIngredient {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Assembles the concatenated window output into the final plan.
///
/// - day `i` (0-based position) becomes `day = i + 1`, `date = start_date + i`
/// - every meal and ingredient gets a fresh id from `ids`
/// - missing `meals`/`ingredients` become empty, missing numbers become 0
pub fn assemble_plan(
    raw_days: Vec<RawDay>,
    start_date: NaiveDate,
    ids: &dyn IdGenerator,
) -> Vec<PlanDay> {
    raw_days
        .into_iter()
        .zip(0u32..)
        .map(|(raw, offset)| PlanDay {
            day: offset + 1,
            date: date_for_offset(start_date, offset),
            meals: raw
                .meals
                .unwrap_or_default()
                .into_iter()
                .enumerate()
                .map(|(position, meal)| assemble_meal(meal, position, ids))
                .collect(),
        })
        .collect()
}

fn assemble_meal(raw: RawMeal, position: usize, ids: &dyn IdGenerator) -> Meal {
    // A missing slot falls back to the slot the prompt asked for at this position,
    // wrapping for days with more meals than slots.
    let slot = match raw.slot {
        Some(name) => MealSlot::from(name),
        None => MEAL_SLOTS[position % MEAL_SLOTS.len()].clone(),
    };

    Meal {
        id: ids.new_id(),
        slot,
        name: raw.name.unwrap_or_default(),
        ingredients: raw
            .ingredients
            .unwrap_or_default()
            .into_iter()
            .map(|ingredient| assemble_ingredient(ingredient, ids))
            .collect(),
        total_calories: raw.total_calories.unwrap_or(0.0),
        total_protein: raw.total_protein.unwrap_or(0.0),
        total_fat: raw.total_fat.unwrap_or(0.0),
        total_carbs: raw.total_carbs.unwrap_or(0.0),
    }
}

fn assemble_ingredient(raw: RawIngredient, ids: &dyn IdGenerator) -> Ingredient {
    Ingredient {
        id: ids.new_id(),
        name: raw.name.unwrap_or_default(),
        quantity: raw.quantity.unwrap_or(0.0),
        calories: raw.calories.unwrap_or(0.0),
        protein: raw.protein,
        fat: raw.fat,
        carbs: raw.carbs,
    }
}
