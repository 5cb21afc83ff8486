use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// clap value parser for `--score`; accepts 0..=100.
pub(crate) fn parse_score(raw: &str) -> Result<u16, String> {
    let value = raw
        .trim()
        .parse::<u16>()
        .map_err(|err| format!("failed to parse '{raw}' as a whole number ({err})"))?;
    if value > 100 {
        return Err(format!("score must be between 0 and 100, got {value}"));
    }
    Ok(value)
}
