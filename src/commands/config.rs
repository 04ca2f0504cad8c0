use anyhow::Result;
use colored::Colorize;
use ristic_api::config::{self, Config};
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the current configuration with secrets masked
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());

    let cfg = config::load_config(config_path)?;
    let sanitized = sanitize_secrets(&cfg);

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&sanitized)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Listen: {}:{}", cfg.server.host, cfg.server.port);
    println!("  Model: {}", cfg.gemini.model);
    println!("  Max concurrent analyses: {}", cfg.analysis.max_concurrent);
    println!("  Contact recipient: {}", cfg.contact.recipient);

    info!("Configuration validation successful");
    Ok(())
}

/// Sanitize secrets in configuration for safe display
fn sanitize_secrets(cfg: &Config) -> Config {
    let mut sanitized = cfg.clone();
    sanitized.gemini.api_key = mask_api_key(&sanitized.gemini.api_key);
    sanitized
}

/// Mask an API key for safe display
///
/// Shows first 7 and last 4 characters with an ellipsis in between
fn mask_api_key(key: &str) -> String {
    if key.len() <= 11 {
        // Too short to mask meaningfully
        return "***".to_string();
    }

    let prefix = &key[..7];
    let suffix = &key[key.len() - 4..];

    format!("{}...{}", prefix, suffix)
}
