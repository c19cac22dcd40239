use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named weight table used to score a questionnaire.
///
/// `Academic` is driven by semester grades and sums to at most 100 points on its own.
/// `Baseline` starts every student at 50 and adjusts with flat lifestyle weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringScheme {
    #[default]
    Academic,
    Baseline,
}

impl ScoringScheme {
    pub const ALL: [ScoringScheme; 2] = [ScoringScheme::Academic, ScoringScheme::Baseline];

    pub const fn label(self) -> &'static str {
        match self {
            ScoringScheme::Academic => "academic",
            ScoringScheme::Baseline => "baseline",
        }
    }

    pub const fn base_score(self) -> f64 {
        match self {
            ScoringScheme::Academic => 0.0,
            ScoringScheme::Baseline => 50.0,
        }
    }

    pub const fn thresholds(self) -> OutcomeThresholds {
        match self {
            ScoringScheme::Academic => OutcomeThresholds {
                graduate: 70,
                remain_enrolled: 45,
            },
            ScoringScheme::Baseline => OutcomeThresholds {
                graduate: 75,
                remain_enrolled: 50,
            },
        }
    }
}

impl fmt::Display for ScoringScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScoringScheme {
    type Err = UnknownScheme;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "academic" | "grades" => Ok(ScoringScheme::Academic),
            "baseline" | "flat" => Ok(ScoringScheme::Baseline),
            _ => Err(UnknownScheme(value.to_string())),
        }
    }
}

/// Minimum percentages for each outcome; anything lower is a drop-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeThresholds {
    pub graduate: u8,
    pub remain_enrolled: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scoring scheme '{0}' (expected 'academic' or 'baseline')")]
pub struct UnknownScheme(pub String);
