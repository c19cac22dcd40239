use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::intake::QuestionnaireForm;
use super::pipeline::PredictionPipeline;
use super::scoring::{ScoringScheme, UnknownScheme};

/// Optional per-request override of the configured scoring scheme.
#[derive(Debug, Default, Deserialize)]
pub struct PredictionQuery {
    pub scheme: Option<String>,
}

/// Router builder exposing the prediction endpoint.
pub fn prediction_router(pipeline: Arc<PredictionPipeline>) -> Router {
    Router::new()
        .route("/api/v1/predictions", post(predict_handler))
        .with_state(pipeline)
}

pub(crate) async fn predict_handler(
    State(pipeline): State<Arc<PredictionPipeline>>,
    Query(query): Query<PredictionQuery>,
    axum::Json(form): axum::Json<QuestionnaireForm>,
) -> Response {
    let pipeline = match resolve_pipeline(&pipeline, query.scheme.as_deref()) {
        Ok(pipeline) => pipeline,
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    let report = pipeline.run_form(form);
    (StatusCode::OK, axum::Json(report)).into_response()
}

fn resolve_pipeline(
    configured: &PredictionPipeline,
    requested: Option<&str>,
) -> Result<PredictionPipeline, UnknownScheme> {
    match requested {
        Some(raw) if !raw.trim().is_empty() => {
            let scheme = raw.parse::<ScoringScheme>()?;
            Ok(PredictionPipeline::new(scheme))
        }
        _ => Ok(*configured),
    }
}
