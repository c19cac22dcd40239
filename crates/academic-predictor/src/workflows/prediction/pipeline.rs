use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use super::domain::QuestionnaireRecord;
use super::intake::QuestionnaireForm;
use super::recommendations::{Recommendation, RecommendationEngine};
use super::scoring::{ScoreCard, ScoreEngine, ScoringScheme};
use super::views::ResultView;

/// Runs one submission through scoring, recommendations, and view rendering.
///
/// Holds no per-submission state, so one instance can be shared across requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredictionPipeline {
    scoring: ScoreEngine,
    recommendations: RecommendationEngine,
}

impl PredictionPipeline {
    pub fn new(scheme: ScoringScheme) -> Self {
        Self {
            scoring: ScoreEngine::new(scheme),
            recommendations: RecommendationEngine,
        }
    }

    pub fn scheme(&self) -> ScoringScheme {
        self.scoring.scheme()
    }

    pub fn run_form(&self, form: QuestionnaireForm) -> PredictionReport {
        self.run(form.into_record())
    }

    pub fn run(&self, record: QuestionnaireRecord) -> PredictionReport {
        let score = self.scoring.evaluate(&record);
        debug!(
            scheme = %score.result.scheme,
            raw_score = score.raw_score,
            components = score.components.len(),
            "questionnaire scored"
        );

        let recommendations = self.recommendations.recommend(&record, &score.result);
        let view = ResultView::render(&score.result, &recommendations);

        info!(
            scheme = %score.result.scheme,
            outcome = score.result.outcome.label(),
            percentage = score.result.percentage,
            recommendations = recommendations.len(),
            "prediction generated"
        );

        PredictionReport {
            prediction: score.result.outcome.code(),
            outcome_label: score.result.outcome.label(),
            record,
            score,
            recommendations,
            view,
            generated_at: Utc::now(),
        }
    }
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    /// Outcome class: 0 drop out, 1 remain enrolled, 2 graduate.
    pub prediction: u8,
    pub outcome_label: &'static str,
    pub record: QuestionnaireRecord,
    pub score: ScoreCard,
    pub recommendations: Vec<Recommendation>,
    pub view: ResultView,
    pub generated_at: DateTime<Utc>,
}

impl PredictionReport {
    pub fn summary(&self) -> String {
        format!(
            "{} ({}%, {} scheme)",
            self.score.result.outcome.label(),
            self.score.result.percentage,
            self.score.result.scheme
        )
    }
}
