use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::plan::PlanDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Nutrition,
    Exercise,
    Hydration,
    Lifestyle,
}

impl TaskCategory {
    pub fn icon(self) -> &'static str {
        match self {
            TaskCategory::Nutrition => "🥗",
            TaskCategory::Exercise => "🏃",
            TaskCategory::Hydration => "💧",
            TaskCategory::Lifestyle => "🌿",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    #[default]
    Active,
    Completed,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlanTask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: TaskCategory,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// A consultant-authored bundle of tasks and an optional meal plan assigned to one client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub consultant_id: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_name: String,
    pub title: String,
    #[serde(default)]
    pub program_goal: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_consultation: Option<NaiveDate>,
    #[serde(default)]
    pub status: PlanStatus,
    #[serde(default)]
    pub tasks: Vec<ActionPlanTask>,
    #[serde(default)]
    pub plan_days: Vec<PlanDay>,
}

impl ActionPlan {
    pub fn is_active(&self) -> bool {
        self.status == PlanStatus::Active
    }
}
