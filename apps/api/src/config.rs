use anyhow::{Context, Result};

use crate::meal_plan::batching::{clamp_batch_size, DEFAULT_BATCH_SIZE};

const DEFAULT_FOOD_LOOKUP_BASE_URL: &str = "https://world.openfoodfacts.org";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub food_lookup_base_url: String,
    /// Days per model call in meal-plan generation (1..=7).
    pub meal_plan_batch_size: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let meal_plan_batch_size = match std::env::var("MEAL_PLAN_BATCH_SIZE") {
            Ok(raw) => raw
                .parse::<u32>()
                .context("MEAL_PLAN_BATCH_SIZE must be a positive integer")?,
            Err(_) => DEFAULT_BATCH_SIZE,
        };

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            food_lookup_base_url: std::env::var("FOOD_LOOKUP_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_FOOD_LOOKUP_BASE_URL.to_string()),
            meal_plan_batch_size: clamp_batch_size(meal_plan_batch_size),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
