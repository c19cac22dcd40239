use crate::infra::AppState;
use academic_predictor::workflows::prediction::{
    prediction_router, PredictionPipeline, ScoringScheme,
};
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use std::path::{Component, Path as FsPath, PathBuf};
use std::sync::Arc;
use tracing::debug;

const INDEX_PAGE: &str = "index.html";

#[derive(Debug, Serialize)]
pub(crate) struct SchemeSummary {
    pub(crate) name: &'static str,
    pub(crate) base_score: f64,
    pub(crate) graduate_threshold: u8,
    pub(crate) remain_enrolled_threshold: u8,
    pub(crate) default: bool,
}

pub(crate) fn with_service_routes(pipeline: Arc<PredictionPipeline>) -> axum::Router {
    prediction_router(pipeline)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/schemes", axum::routing::get(schemes_endpoint))
        .route("/", axum::routing::get(index_page))
        .route("/*path", axum::routing::get(static_asset))
}

pub(crate) async fn healthcheck(Extension(state): Extension<AppState>) -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "scheme": state.scheme }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn schemes_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<Vec<SchemeSummary>> {
    let schemes = ScoringScheme::ALL
        .into_iter()
        .map(|scheme| {
            let thresholds = scheme.thresholds();
            SchemeSummary {
                name: scheme.label(),
                base_score: scheme.base_score(),
                graduate_threshold: thresholds.graduate,
                remain_enrolled_threshold: thresholds.remain_enrolled,
                default: scheme == state.scheme,
            }
        })
        .collect();

    Json(schemes)
}

pub(crate) async fn index_page(Extension(state): Extension<AppState>) -> Response {
    serve_file(&state.static_dir, INDEX_PAGE).await
}

pub(crate) async fn static_asset(
    Extension(state): Extension<AppState>,
    Path(path): Path<String>,
) -> Response {
    serve_file(&state.static_dir, &path).await
}

async fn serve_file(root: &FsPath, requested: &str) -> Response {
    let Some(file) = resolve_asset(root, requested) else {
        debug!(requested, "rejected static asset path");
        return not_found(requested);
    };

    match tokio::fs::read(&file).await {
        Ok(bytes) => {
            let content_type = mime_guess::from_path(&file)
                .first_or_octet_stream()
                .to_string();
            (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(err) => {
            debug!(path = %file.display(), error = %err, "static asset unavailable");
            not_found(requested)
        }
    }
}

/// Join `requested` under `root`, refusing anything that could step outside it.
pub(crate) fn resolve_asset(root: &FsPath, requested: &str) -> Option<PathBuf> {
    let relative = requested.trim_start_matches('/');
    if relative.is_empty() {
        return Some(root.join(INDEX_PAGE));
    }

    let mut resolved = root.to_path_buf();
    for component in FsPath::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(resolved)
}

fn not_found(requested: &str) -> Response {
    let payload = json!({ "error": format!("no such page: {requested}") });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn app_state(static_dir: PathBuf) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(recorder.handle()),
            scheme: ScoringScheme::Academic,
            static_dir: Arc::new(static_dir),
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "academic-predictor-{name}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn healthcheck_reports_configured_scheme() {
        let state = app_state(PathBuf::from("static"));
        let Json(body) = healthcheck(Extension(state)).await;
        assert_eq!(body, json!({ "status": "ok", "scheme": "academic" }));
    }

    #[tokio::test]
    async fn readiness_flips_once_flag_is_set() {
        let state = app_state(PathBuf::from("static"));

        let response = readiness_endpoint(Extension(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.readiness.store(true, Ordering::Release);
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ready" }));
    }

    #[tokio::test]
    async fn schemes_endpoint_marks_the_default() {
        let mut state = app_state(PathBuf::from("static"));
        state.scheme = ScoringScheme::Baseline;

        let Json(schemes) = schemes_endpoint(Extension(state)).await;
        assert_eq!(schemes.len(), 2);

        let baseline = schemes
            .iter()
            .find(|scheme| scheme.name == "baseline")
            .expect("baseline listed");
        assert!(baseline.default);
        assert_eq!(baseline.base_score, 50.0);
        assert_eq!(baseline.graduate_threshold, 75);
        assert_eq!(baseline.remain_enrolled_threshold, 50);

        let academic = schemes
            .iter()
            .find(|scheme| scheme.name == "academic")
            .expect("academic listed");
        assert!(!academic.default);
        assert_eq!(academic.graduate_threshold, 70);
    }

    #[test]
    fn resolve_asset_refuses_parent_components() {
        let root = FsPath::new("/srv/static");
        assert_eq!(
            resolve_asset(root, "css/site.css"),
            Some(PathBuf::from("/srv/static/css/site.css"))
        );
        assert_eq!(
            resolve_asset(root, ""),
            Some(PathBuf::from("/srv/static/index.html"))
        );
        assert_eq!(resolve_asset(root, "../Cargo.toml"), None);
        assert_eq!(resolve_asset(root, "css/../../secret"), None);
    }

    #[tokio::test]
    async fn static_asset_serves_files_with_guessed_type() {
        let dir = scratch_dir("assets");
        std::fs::write(dir.join("index.html"), "<h1>Predictor</h1>").expect("write index");
        std::fs::write(dir.join("script.js"), "console.log('ok');").expect("write script");
        let state = app_state(dir.clone());

        let response = index_page(Extension(state.clone())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");

        let response = static_asset(Extension(state), Path("script.js".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE]
            .to_str()
            .expect("ascii header")
            .to_string();
        assert!(content_type.contains("javascript"));

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn static_asset_returns_not_found_json() {
        let dir = scratch_dir("missing");
        let state = app_state(dir.clone());

        let response = static_asset(Extension(state.clone()), Path("nope.css".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["error"].as_str().expect("error text").contains("nope.css"));

        let response = static_asset(Extension(state), Path("../Cargo.toml".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn service_router_scores_posted_questionnaire() {
        let state = app_state(PathBuf::from("static"));
        let app = with_service_routes(Arc::new(PredictionPipeline::new(state.scheme)))
            .layer(Extension(state));

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/predictions?scheme=baseline")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"motivation":"high","tuition":"fully-paid"}"#))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["score"]["result"]["scheme"], "baseline");
        assert_eq!(body["score"]["result"]["outcome"], "graduate");
    }

    #[tokio::test]
    async fn service_router_exposes_health_through_extension() {
        let state = app_state(PathBuf::from("static"));
        let app = with_service_routes(Arc::new(PredictionPipeline::default()))
            .layer(Extension(state));

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }
}
