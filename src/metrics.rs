use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> PrometheusHandle {
    let builder = PrometheusBuilder::new();

    let handle = builder
        .install_recorder()
        .expect("Failed to install Prometheus recorder");

    init_metric_descriptions();

    handle
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "tariff_quotes_total",
        "Total number of fee quotes computed"
    );
    describe_counter!(
        "analysis_requests_total",
        "Total number of analysis requests handled"
    );
    describe_counter!(
        "analysis_outcomes_total",
        "Analysis outcomes by kind (parsed, raw, unavailable)"
    );
    describe_histogram!(
        "analysis_duration_seconds",
        "Wall time of the remote analysis round trip"
    );
    describe_counter!(
        "contact_inquiries_total",
        "Total number of contact inquiries composed"
    );
    describe_gauge!(
        "ristic_api_info",
        "Service version and build information"
    );

    gauge!("ristic_api_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a fee quote
pub fn record_quote(procedure: &str) {
    counter!(
        "tariff_quotes_total",
        "procedure" => procedure.to_string(),
    )
    .increment(1);
}

/// Record an analysis request
pub fn record_analysis_request(language: &str) {
    counter!(
        "analysis_requests_total",
        "language" => language.to_string(),
    )
    .increment(1);
}

/// Record the outcome of an analysis (parsed, raw, unavailable)
pub fn record_analysis_outcome(outcome: &str) {
    counter!(
        "analysis_outcomes_total",
        "outcome" => outcome.to_string(),
    )
    .increment(1);
}

/// Record the remote round-trip duration
pub fn record_analysis_duration(duration: Duration) {
    histogram!("analysis_duration_seconds").record(duration.as_secs_f64());
}

/// Record a contact inquiry
pub fn record_contact_inquiry() {
    counter!("contact_inquiries_total").increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_metrics() {
        init_metric_descriptions();

        record_quote("criminal");
        record_analysis_request("sr");
        record_analysis_outcome("parsed");
        record_analysis_duration(Duration::from_secs(2));
        record_contact_inquiry();

        // Just verify the calls don't panic without an installed recorder
    }
}
