use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A meal as logged by the client (free text, not a planned meal).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedMeal {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub calories: f64,
}

/// The wellness record a client submits for one day.
///
/// Free-text fields default to empty; an empty field means "not reported".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub client_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub meals: Vec<LoggedMeal>,
    /// Litres.
    #[serde(default)]
    pub water_intake: f64,
    /// Kilograms. Zero is treated the same as absent.
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub exercise: String,
    #[serde(default)]
    pub meals_experience: String,
    #[serde(default)]
    pub bowel_movement: String,
    #[serde(default)]
    pub night_sleep: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub report_sent: bool,
}

impl DailyLog {
    pub fn reported_weight(&self) -> Option<f64> {
        self.weight.filter(|w| *w > 0.0)
    }

    pub fn has_symptoms(&self) -> bool {
        !self.symptoms.trim().is_empty()
    }
}
