use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The five meal slots of a planned day, in serving order.
pub const MEAL_SLOTS: [MealSlot; 5] = [
    MealSlot::Breakfast,
    MealSlot::Snack,
    MealSlot::Lunch,
    MealSlot::AfternoonSnack,
    MealSlot::Dinner,
];

/// Category of a meal within a day.
///
/// Serialized as its display name ("Afternoon Snack", not "AfternoonSnack").
/// Names outside the fixed set are kept as `Other` instead of failing decode;
/// model output is not guaranteed to stick to the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MealSlot {
    Breakfast,
    Snack,
    Lunch,
    AfternoonSnack,
    Dinner,
    Other(String),
}

impl MealSlot {
    pub fn as_str(&self) -> &str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Snack => "Snack",
            MealSlot::Lunch => "Lunch",
            MealSlot::AfternoonSnack => "Afternoon Snack",
            MealSlot::Dinner => "Dinner",
            MealSlot::Other(name) => name,
        }
    }
}

impl From<String> for MealSlot {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "breakfast" => MealSlot::Breakfast,
            "snack" | "morning snack" => MealSlot::Snack,
            "lunch" => MealSlot::Lunch,
            "afternoon snack" => MealSlot::AfternoonSnack,
            "dinner" => MealSlot::Dinner,
            _ => MealSlot::Other(value),
        }
    }
}

impl From<MealSlot> for String {
    fn from(slot: MealSlot) -> Self {
        match slot {
            MealSlot::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// One ingredient of a planned meal. Quantities are grams.
///
/// Macro fields are carried as the model stated them, already scaled to
/// `quantity`. Protein/fat/carbs are optional at this level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub calories: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
}

/// One meal in a planned day. The `total_*` fields are trusted as given and
/// are not reconciled against the ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub slot: MealSlot,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub total_calories: f64,
    #[serde(default)]
    pub total_protein: f64,
    #[serde(default)]
    pub total_fat: f64,
    #[serde(default)]
    pub total_carbs: f64,
}

/// One calendar day of a meal plan. `day` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: u32,
    pub date: NaiveDate,
    #[serde(default)]
    pub meals: Vec<Meal>,
}
