mod config;
mod error;
mod loader;
mod server;

use std::sync::Arc;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use menu_core::meal_table::MealTable;
use menu_core::portion::Recipe;
use menu_core::session::OrderingSession;
use menu_core::view_api::{Intent, ViewModel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    if std::env::args().nth(1).as_deref() == Some("--schema") {
        let schemas = serde_json::json!({
            "intent": schemars::schema_for!(Intent),
            "view_model": schemars::schema_for!(ViewModel),
        });
        println!("{}", serde_json::to_string_pretty(&schemas)?);
        return Ok(());
    }

    info!("starting ordering console");

    let config = Config::from_env()?;
    let catalog_source = config
        .catalog_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled sample".to_string());
    info!(
        catalog = %catalog_source,
        default_category = %config.default_category,
        description_limit = config.description_limit,
        "configuration loaded"
    );

    let catalog = loader::load_catalog(&config)?;
    info!(
        dishes = catalog.len(),
        categories = catalog.categories().len(),
        "catalog loaded"
    );

    let mut session = OrderingSession::new(
        Arc::new(catalog),
        Arc::new(MealTable::standard()),
        Arc::new(Recipe::standard()),
        config.session_options(),
    )?;
    info!("meal table validated, reading intents from stdin");

    server::serve(
        &mut session,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
    .inspect_err(|e| tracing::error!(error = %e, "session loop failed"))?;

    info!(selected = session.ledger().total(), "ordering console shut down");
    Ok(())
}
