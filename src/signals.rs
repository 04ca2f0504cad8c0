use anyhow::Result;
use arc_swap::ArcSwap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use crate::config::Config;

/// Shutdown signal types
#[derive(Debug, Clone, Copy)]
pub enum ShutdownSignal {
    /// Graceful shutdown (drain connections, clean up)
    Graceful,
}

/// Setup signal handlers for the server
///
/// Returns a broadcast sender for shutdown signals and a join handle for the signal task
///
/// Handles:
/// - SIGTERM/SIGINT: Graceful shutdown
/// - SIGHUP: Configuration reload
#[cfg(unix)]
pub fn setup_signal_handlers(
    config: Arc<ArcSwap<Config>>,
    config_path: PathBuf,
) -> (
    broadcast::Sender<ShutdownSignal>,
    tokio::task::JoinHandle<()>,
) {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        let mut sigterm = signal(SignalKind::terminate()).expect("Failed to setup SIGTERM handler");
        let mut sigint = signal(SignalKind::interrupt()).expect("Failed to setup SIGINT handler");
        let mut sighup = signal(SignalKind::hangup()).expect("Failed to setup SIGHUP handler");

        loop {
            tokio::select! {
                _ = sigterm.recv() => {
                    info!("SIGTERM received, initiating graceful shutdown");
                    let _ = tx_clone.send(ShutdownSignal::Graceful);
                    break;
                }
                _ = sigint.recv() => {
                    info!("SIGINT received, initiating graceful shutdown");
                    let _ = tx_clone.send(ShutdownSignal::Graceful);
                    break;
                }
                _ = sighup.recv() => {
                    info!("SIGHUP received, reloading configuration");
                    if let Err(e) = reload_config(&config, &config_path) {
                        error!("Failed to reload configuration: {}", e);
                    } else {
                        info!("Configuration reloaded successfully");
                    }
                }
            }
        }
    });

    (shutdown_tx, handle)
}

/// Windows placeholder - signals not fully supported
#[cfg(not(unix))]
pub fn setup_signal_handlers(
    _config: Arc<ArcSwap<Config>>,
    _config_path: PathBuf,
) -> (
    broadcast::Sender<ShutdownSignal>,
    tokio::task::JoinHandle<()>,
) {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        // On Windows, only Ctrl+C is supported
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl+C received, initiating shutdown");
                let _ = tx_clone.send(ShutdownSignal::Graceful);
            }
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {}", e);
            }
        }
    });

    (shutdown_tx, handle)
}

/// Reload configuration atomically
///
/// Loads and validates the new configuration, then swaps it in. If any
/// step fails, the old configuration remains in place.
fn reload_config(config: &Arc<ArcSwap<Config>>, config_path: &PathBuf) -> Result<()> {
    info!("Loading new configuration from {}...", config_path.display());

    let new_config = crate::config::load_config(config_path)?;

    info!(
        "New configuration loaded. Server: {}:{}, model: {}",
        new_config.server.host, new_config.server.port, new_config.gemini.model,
    );

    config.store(Arc::new(new_config));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnalysisConfig, ContactConfig, GeminiConfig, ServerConfig};

    fn create_test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                log_level: "info".to_string(),
                log_format: "text".to_string(),
            },
            gemini: GeminiConfig {
                api_key: "test-key".to_string(),
                base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                model: "gemini-test".to_string(),
                timeout_seconds: 30,
            },
            analysis: AnalysisConfig::default(),
            contact: ContactConfig {
                recipient: "office@akristic.rs".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_setup_signal_handlers() {
        let config = Arc::new(ArcSwap::from_pointee(create_test_config()));
        let (shutdown_tx, _handle) =
            setup_signal_handlers(config, PathBuf::from("config.toml"));

        // Should be able to subscribe to shutdown signals
        let mut rx = shutdown_tx.subscribe();

        shutdown_tx.send(ShutdownSignal::Graceful).unwrap();

        let received = rx.recv().await.unwrap();
        matches!(received, ShutdownSignal::Graceful);
    }

    #[test]
    fn test_reload_with_missing_file_keeps_old_config() {
        let config = Arc::new(ArcSwap::from_pointee(create_test_config()));
        let result = reload_config(&config, &PathBuf::from("/nonexistent/config.toml"));
        assert!(result.is_err());
        assert_eq!(config.load().gemini.model, "gemini-test");
    }
}
