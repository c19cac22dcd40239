use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_service_routes;
use academic_predictor::config::AppConfig;
use academic_predictor::error::AppError;
use academic_predictor::telemetry;
use academic_predictor::workflows::prediction::PredictionPipeline;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let scheme = config.scoring.scheme;
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        scheme,
        static_dir: Arc::new(config.assets.static_dir.clone()),
    };

    let pipeline = Arc::new(PredictionPipeline::new(scheme));

    let app = with_service_routes(pipeline)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        %scheme,
        static_dir = %config.assets.static_dir.display(),
        "academic predictor ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
