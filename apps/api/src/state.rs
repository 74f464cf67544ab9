use std::sync::Arc;

use crate::config::Config;
use crate::ids::IdGenerator;
use crate::llm_client::TextGenerator;
use crate::nutrition::food_lookup::FoodLookup;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model client, built once at startup. Default: `LlmClient`.
    pub llm: Arc<dyn TextGenerator>,
    pub ids: Arc<dyn IdGenerator>,
    /// Public food-nutrition lookup. Default: `OpenFoodFactsClient`.
    pub foods: Arc<dyn FoodLookup>,
    pub config: Config,
}
