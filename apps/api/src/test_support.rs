//! Fakes shared by unit and router tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::config::Config;
use crate::ids::IdGenerator;
use crate::llm_client::{LlmError, TextGenerator};
use crate::nutrition::food_lookup::{FoodLookup, FoodLookupError, FoodResult};
use crate::state::AppState;

/// Deterministic ids: `id-1`, `id-2`, ...
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn new_id(&self) -> String {
        format!("id-{}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Replays canned model outputs in order and records every prompt it saw.
pub struct ScriptedGenerator {
    outputs: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new(outputs: Vec<Result<String, LlmError>>) -> Self {
        Self {
            outputs: Mutex::new(outputs.into()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str, _max_output_tokens: u32) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.outputs
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }
}

/// A well-formed window of `days` days. Day numbers and dates are
/// deliberately wrong so tests can check they get rewritten.
pub fn window_response(start_day: u32, days: u32) -> String {
    let days: Vec<_> = (0..days)
        .map(|i| {
            json!({
                "day": 1,
                "date": "1999-12-31",
                "meals": [
                    {
                        "id": "model-id",
                        "slot": "breakfast",
                        "name": format!("Oats for day {}", start_day + i),
                        "ingredients": [
                            {"id": "x", "name": "Oats", "quantity": 50, "calories": 190, "protein": 6.5, "fat": 3.5, "carbs": 33},
                            {"name": "Milk", "quantity": 200, "calories": 100}
                        ],
                        "totalCalories": 290,
                        "totalProtein": 13,
                        "totalFat": 7,
                        "totalCarbs": 43
                    },
                    {
                        "slot": "lunch",
                        "name": "Chicken salad",
                        "ingredients": [
                            {"name": "Chicken breast", "quantity": 150, "calories": 250}
                        ],
                        "totalCalories": 250
                    }
                ]
            })
        })
        .collect();
    serde_json::Value::Array(days).to_string()
}

/// Returns a fixed result list, or an upstream error when `fail` is set.
pub struct StaticFoods {
    pub foods: Vec<FoodResult>,
    pub fail: bool,
}

#[async_trait]
impl FoodLookup for StaticFoods {
    async fn search(&self, _query: &str) -> Result<Vec<FoodResult>, FoodLookupError> {
        if self.fail {
            return Err(FoodLookupError::Api {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        Ok(self.foods.clone())
    }
}

pub fn test_config() -> Config {
    Config {
        anthropic_api_key: "test-key".to_string(),
        food_lookup_base_url: "http://localhost".to_string(),
        meal_plan_batch_size: 3,
        port: 0,
        rust_log: "debug".to_string(),
    }
}

pub fn test_state(llm: Arc<dyn TextGenerator>, foods: Arc<dyn FoodLookup>) -> AppState {
    AppState {
        llm,
        ids: Arc::new(SequentialIds::default()),
        foods,
        config: test_config(),
    }
}
