mod config;
mod errors;
mod ids;
mod llm_client;
mod meal_plan;
mod models;
mod nutrition;
mod reports;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ids::{IdGenerator, UuidGenerator};
use crate::llm_client::LlmClient;
use crate::nutrition::food_lookup::OpenFoodFactsClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Fails fast on a missing ANTHROPIC_API_KEY
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting NutriCoach API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let ids: Arc<dyn IdGenerator> = Arc::new(UuidGenerator);

    let foods = OpenFoodFactsClient::new(&config.food_lookup_base_url, ids.clone())?;
    info!("Food lookup client initialized ({})", config.food_lookup_base_url);

    info!(
        "Meal plans generate {} days per model call",
        config.meal_plan_batch_size
    );

    let state = AppState {
        llm: Arc::new(llm),
        ids,
        foods: Arc::new(foods),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the web app's domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
