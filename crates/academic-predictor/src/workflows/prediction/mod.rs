//! Student questionnaire intake, outcome scoring, and study recommendations.
//!
//! Each stage is a pure function of the previous stage's output:
//! form -> [`QuestionnaireRecord`] -> [`PredictionResult`] -> [`Recommendation`]s -> [`ResultView`].

pub mod domain;
pub mod import;
pub mod intake;
pub mod pipeline;
pub mod recommendations;
pub mod router;
pub mod scoring;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    ActivitySet, Answer, Gender, MaritalStatus, Motivation, Occupation, ParentEducation,
    PriorQualification, QuestionnaireRecord, StudentType, TuitionStatus, NO_ACTIVITIES,
};
pub use import::{ImportedQuestionnaire, QuestionnaireImportError, QuestionnaireImporter};
pub use intake::QuestionnaireForm;
pub use pipeline::{PredictionPipeline, PredictionReport};
pub use recommendations::{Priority, Recommendation, RecommendationEngine, RecommendationIcon};
pub use router::prediction_router;
pub use scoring::{
    Outcome, OutcomeThresholds, PredictionResult, ScoreCard, ScoreComponent, ScoreEngine,
    ScoreFactor, ScoringScheme, UnknownScheme,
};
pub use views::{RecommendationView, ResultTheme, ResultView};
