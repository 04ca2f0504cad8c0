use anyhow::Result;
use arc_swap::ArcSwap;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::sync::Semaphore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config, handlers, handlers::AppState, metrics, signals::setup_signal_handlers,
};

/// Base64 inflates payloads by 4/3; leave headroom above the decoded
/// attachment bound for the JSON envelope.
fn body_limit_for(config: &Config) -> usize {
    config.analysis.max_attachment_bytes / 3 * 4 + 64 * 1024
}

/// Start the API server
///
/// This function:
/// 1. Initializes metrics
/// 2. Sets up signal handlers for graceful shutdown and config reload
/// 3. Creates the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown support
pub async fn start_server(config: Config, config_path: PathBuf) -> Result<()> {
    info!("Initializing Prometheus metrics...");
    let metrics_handle = Arc::new(metrics::init_metrics());

    // Wrap config in ArcSwap for atomic reload support
    let config_swap = Arc::new(ArcSwap::from_pointee(config.clone()));

    // Setup signal handlers (SIGTERM, SIGINT for shutdown; SIGHUP for reload)
    let (shutdown_tx, signal_handle) = setup_signal_handlers(config_swap.clone(), config_path);
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app_state = AppState {
        config: config_swap.clone(),
        http_client: reqwest::Client::new(),
        analysis_slots: Arc::new(Semaphore::new(config.analysis.max_concurrent)),
    };

    let app = create_router(&config, app_state, metrics_handle);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting ristic-api on {}", addr);
    info!(
        "Configuration: model {}, max {} concurrent analyses, contact {}",
        config.gemini.model, config.analysis.max_concurrent, config.contact.recipient
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(
    config: &Config,
    app_state: AppState,
    metrics_handle: Arc<metrics_exporter_prometheus::PrometheusHandle>,
) -> Router {
    let api_routes = Router::new()
        .route(
            "/api/v1/tariff/criminal",
            get(handlers::tariff::list_criminal_tiers),
        )
        .route(
            "/api/v1/tariff/non-assessable",
            get(handlers::tariff::list_non_assessable_categories),
        )
        .route("/api/v1/tariff/quote", post(handlers::tariff::handle_quote))
        .route("/api/v1/analyze", post(handlers::analyze::handle_analyze))
        .route("/api/v1/contact", post(handlers::contact::handle_contact))
        .with_state(app_state);

    Router::new()
        // Operational endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/metrics", get(handlers::metrics_handler::metrics))
        .with_state(metrics_handle)
        .merge(api_routes)
        .layer(DefaultBodyLimit::max(body_limit_for(config)))
        // The SPA is served from a different origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
