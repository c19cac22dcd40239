mod config;
mod policy;
pub(crate) mod rules;

pub use config::{OutcomeThresholds, ScoringScheme, UnknownScheme};
pub use policy::Outcome;

use super::domain::QuestionnaireRecord;
use policy::{classify, finalize_percentage};
use serde::{Deserialize, Serialize};

/// Stateless scorer that applies one weight table to a questionnaire record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine {
    scheme: ScoringScheme,
}

impl ScoreEngine {
    pub fn new(scheme: ScoringScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> ScoringScheme {
        self.scheme
    }

    pub fn score(&self, record: &QuestionnaireRecord) -> PredictionResult {
        self.evaluate(record).result
    }

    /// Score with the full contribution trail.
    pub fn evaluate(&self, record: &QuestionnaireRecord) -> ScoreCard {
        let (components, raw_score) = rules::score_record(record, self.scheme);
        let percentage = finalize_percentage(raw_score);
        let outcome = classify(percentage, self.scheme.thresholds());

        ScoreCard {
            result: PredictionResult {
                percentage,
                outcome,
                scheme: self.scheme,
            },
            raw_score,
            components,
        }
    }
}

/// Which input a score component was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Base,
    Motivation,
    ParentEducation,
    Extracurricular,
    FatherOccupation,
    MotherOccupation,
    ParentOccupation,
    Tuition,
    StudentType,
    MaritalStatus,
    FirstSemesterGrade,
    SecondSemesterGrade,
    PriorQualification,
    EnrollmentAge,
    Displaced,
}

/// Discrete contribution to a score, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: f64,
    pub notes: String,
}

/// Bounded percentage and the outcome it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub percentage: u8,
    pub outcome: Outcome,
    pub scheme: ScoringScheme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub result: PredictionResult,
    pub raw_score: f64,
    pub components: Vec<ScoreComponent>,
}
