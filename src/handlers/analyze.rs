use crate::{
    analyst::{self, AnalysisRequest, AnalysisResult, RiskLevel},
    attachment,
    error::AppError,
    metrics,
    providers::gemini::GeminiClient,
};
use axum::{extract::State, Json};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<arc_swap::ArcSwap<crate::config::Config>>,
    pub http_client: reqwest::Client,
    /// In-flight guard: analyses beyond the configured limit are refused,
    /// never queued, so overlapping upstream calls cannot pile up.
    pub analysis_slots: Arc<Semaphore>,
}

/// Handle POST /api/v1/analyze
///
/// Always answers 200 with a renderable [`AnalysisResult`] once the
/// precondition and attachment checks pass; remote and parse failures are
/// absorbed into fallback payloads inside the gateway.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let config = state.config.load();

    if let Some(att) = &request.attachment {
        attachment::validate_attachment(att, config.analysis.max_attachment_bytes)?;
    }

    let _permit = state
        .analysis_slots
        .clone()
        .try_acquire_owned()
        .map_err(|_| AppError::Busy("An analysis is already in progress".to_string()))?;

    metrics::record_analysis_request(request.language.as_str());

    tracing::info!(
        language = %request.language,
        text_len = request.text.len(),
        has_attachment = request.attachment.is_some(),
        "Handling analysis request"
    );

    let start = Instant::now();
    let client = GeminiClient::new(state.http_client.clone(), config.gemini.clone());
    let result = analyst::analyze(&client, &request).await?;
    metrics::record_analysis_duration(start.elapsed());

    let outcome = match result.risk_level {
        RiskLevel::Unknown => "unavailable",
        RiskLevel::Info => "raw",
        _ => "parsed",
    };
    metrics::record_analysis_outcome(outcome);

    tracing::info!(
        outcome = outcome,
        duration_ms = start.elapsed().as_millis() as u64,
        "Completed analysis request"
    );

    Ok(Json(result))
}
