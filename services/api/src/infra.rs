use academic_predictor::workflows::prediction::ScoringScheme;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) scheme: ScoringScheme,
    pub(crate) static_dir: Arc<PathBuf>,
}

pub(crate) fn parse_scheme(raw: &str) -> Result<ScoringScheme, String> {
    raw.parse::<ScoringScheme>().map_err(|err| err.to_string())
}
