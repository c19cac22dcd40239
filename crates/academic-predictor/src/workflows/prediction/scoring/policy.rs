use super::config::OutcomeThresholds;
use serde::{Deserialize, Serialize};

/// Discrete classification of a student's projected path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Graduate,
    RemainEnrolled,
    DropOut,
}

impl Outcome {
    pub const fn label(self) -> &'static str {
        match self {
            Outcome::Graduate => "Graduate",
            Outcome::RemainEnrolled => "Remain Enrolled",
            Outcome::DropOut => "Drop Out",
        }
    }

    /// Numeric class reported as `prediction`: 0 drop out, 1 enrolled, 2 graduate.
    pub const fn code(self) -> u8 {
        match self {
            Outcome::DropOut => 0,
            Outcome::RemainEnrolled => 1,
            Outcome::Graduate => 2,
        }
    }

    pub const fn is_at_risk(self) -> bool {
        matches!(self, Outcome::DropOut | Outcome::RemainEnrolled)
    }
}

/// Round to the nearest integer first, then clamp into `0..=100`.
pub(crate) fn finalize_percentage(raw_score: f64) -> u8 {
    if raw_score.is_nan() {
        return 0;
    }

    raw_score.round().clamp(0.0, 100.0) as u8
}

pub(crate) fn classify(percentage: u8, thresholds: OutcomeThresholds) -> Outcome {
    if percentage >= thresholds.graduate {
        Outcome::Graduate
    } else if percentage >= thresholds.remain_enrolled {
        Outcome::RemainEnrolled
    } else {
        Outcome::DropOut
    }
}
