//! Library ledger - prints today's dashboard and reports as JSON

use chrono::Local;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_ledger::{config::AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_ledger={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting library ledger v{}", env!("CARGO_PKG_VERSION"));

    let today = Local::now().date_naive();
    let state = AppState::new(config, today)?;
    let reports = &state.services.reports;

    let output = json!({
        "dashboard": reports.dashboard(today).await,
        "overdue": reports.overdue_report(today).await,
        "available": reports.available_by_category(None).await,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
