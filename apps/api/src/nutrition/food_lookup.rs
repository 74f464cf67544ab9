//! Food lookup — searches the public Open Food Facts database for per-100 g nutrition.
//!
//! `AppState` holds an `Arc<dyn FoodLookup>`; `OpenFoodFactsClient` is the production impl.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::ids::IdGenerator;

const SEARCH_PATH: &str = "/cgi/search.pl";
const PAGE_SIZE: u32 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 15;
const SEARCH_FIELDS: &str = "id,product_name,nutriments";

#[derive(Debug, Error)]
pub enum FoodLookupError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Nutrition for one food, per 100 g, rounded to whole numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodResult {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

#[async_trait]
pub trait FoodLookup: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<FoodResult>, FoodLookupError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Open Food Facts is loose about types: ids and nutriment values show up
/// as numbers or strings depending on the product.
#[derive(Debug, Default, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub nutriments: Option<Value>,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

pub struct OpenFoodFactsClient {
    client: Client,
    base_url: String,
    ids: Arc<dyn IdGenerator>,
}

impl OpenFoodFactsClient {
    pub fn new(base_url: &str, ids: Arc<dyn IdGenerator>) -> Result<Self, FoodLookupError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            ids,
        })
    }
}

#[async_trait]
impl FoodLookup for OpenFoodFactsClient {
    async fn search(&self, query: &str) -> Result<Vec<FoodResult>, FoodLookupError> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        let page_size = PAGE_SIZE.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("search_terms", query),
                ("search_simple", "1"),
                ("action", "process"),
                ("json", "1"),
                ("page_size", page_size.as_str()),
                ("fields", SEARCH_FIELDS),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Food lookup returned {}: {}", status, body);
            return Err(FoodLookupError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let payload: SearchResponse = response.json().await?;
        let results = to_food_results(payload, self.ids.as_ref());
        debug!("Food lookup for {:?} returned {} usable products", query, results.len());
        Ok(results)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Mapping
// ────────────────────────────────────────────────────────────────────────────

/// Keeps products with a name and non-zero kcal/100 g; rounds values.
pub fn to_food_results(response: SearchResponse, ids: &dyn IdGenerator) -> Vec<FoodResult> {
    response
        .products
        .into_iter()
        .filter_map(|product| {
            let name = product
                .product_name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())?;
            let nutriments = product.nutriments.unwrap_or(Value::Null);
            let calories = nutriment(&nutriments, "energy-kcal_100g").filter(|kcal| *kcal != 0.0)?;

            let id = product
                .id
                .as_ref()
                .and_then(value_to_id)
                .unwrap_or_else(|| ids.new_id());

            Some(FoodResult {
                id,
                name,
                calories: calories.round(),
                protein: nutriment(&nutriments, "proteins_100g").unwrap_or(0.0).round(),
                fat: nutriment(&nutriments, "fat_100g").unwrap_or(0.0).round(),
                carbs: nutriment(&nutriments, "carbohydrates_100g")
                    .unwrap_or(0.0)
                    .round(),
            })
        })
        .collect()
}

fn nutriment(nutriments: &Value, key: &str) -> Option<f64> {
    match nutriments.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
