use anyhow::Result;
use colored::Colorize;
use ristic_api::{config, server};
use std::path::PathBuf;
use tracing::info;

/// Execute the serve command
///
/// Loads configuration and runs the server until a shutdown signal arrives.
pub async fn execute(config_path: PathBuf) -> Result<()> {
    println!("{}", "Starting ristic-api...".green());

    let cfg = config::load_config(&config_path)?;
    info!("Configuration loaded from {}", config_path.display());

    server::start_server(cfg, config_path).await?;

    Ok(())
}
