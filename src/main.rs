//! Warehouse Read API - main entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌────────────┐
//! │  Config  │───▶│ Database │───▶│  Gateway   │
//! │  (YAML)  │    │ (sqlx)   │    │  (axum)    │
//! └──────────┘    └──────────┘    └────────────┘
//! ```

use std::sync::Arc;

use warehouse_api::config::AppConfig;
use warehouse_api::db::Database;
use warehouse_api::gateway;
use warehouse_api::logging::init_logging;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);

    // Guard must stay alive for the non-blocking file writer
    let _guard = init_logging(&config);

    tracing::info!("warehouse-api starting (env: {}, rev: {})", env, env!("GIT_HASH"));

    // Lazy pool: the gateway comes up even if PostgreSQL is still starting;
    // queries surface connection errors per request until it is reachable.
    let db = Arc::new(Database::connect_lazy(&config.database)?);

    gateway::run_server(&config.gateway, db).await;

    Ok(())
}
