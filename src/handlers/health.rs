use axum::Json;
use serde_json::{json, Value};

/// Handle /health endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handle /ready endpoint
///
/// The service holds no connections or caches that warm up, so readiness
/// coincides with liveness.
pub async fn readiness_check() -> Json<Value> {
    Json(json!({ "ready": true }))
}
