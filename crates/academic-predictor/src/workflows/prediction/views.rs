use super::recommendations::{Priority, Recommendation};
use super::scoring::{Outcome, PredictionResult};
use serde::Serialize;

/// Colour family the results page uses for an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultTheme {
    Green,
    Amber,
    Red,
}

impl ResultTheme {
    pub const fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Graduate => Self::Green,
            Outcome::RemainEnrolled => Self::Amber,
            Outcome::DropOut => Self::Red,
        }
    }

    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#52a845",
            Self::Amber => "#f39c12",
            Self::Red => "#e74c3c",
        }
    }
}

/// Headline shown on the results page for each outcome.
pub const fn outcome_headline(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Graduate => "Graduate",
        Outcome::RemainEnrolled => "Stay Enrolled",
        Outcome::DropOut => "At Risk",
    }
}

pub const fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Graduate => "Your dedication is paying off! Keep up the great work and embrace every learning opportunity.",
        Outcome::RemainEnrolled => "You're on the right track! Focus on improving your study habits and seeking support when needed.",
        Outcome::DropOut => "Don't give up! Consider seeking academic support, improving time management, and connecting with advisors.",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl From<&Recommendation> for RecommendationView {
    fn from(recommendation: &Recommendation) -> Self {
        Self {
            icon: recommendation.icon.tag(),
            title: recommendation.title.clone(),
            description: recommendation.description.clone(),
            priority: recommendation.priority,
        }
    }
}

/// Render-ready snapshot of one prediction for the results page.
#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub percentage: u8,
    pub percentage_label: String,
    /// Fill fraction for the progress ring, `0.0..=1.0`.
    pub progress: f32,
    pub outcome: Outcome,
    pub label: &'static str,
    pub message: &'static str,
    pub theme: ResultTheme,
    pub theme_color: &'static str,
    pub high_priority: Vec<RecommendationView>,
    pub additional: Vec<RecommendationView>,
}

impl ResultView {
    pub fn render(result: &PredictionResult, recommendations: &[Recommendation]) -> Self {
        let theme = ResultTheme::for_outcome(result.outcome);
        let (high, additional): (Vec<&Recommendation>, Vec<&Recommendation>) = recommendations
            .iter()
            .partition(|recommendation| recommendation.priority == Priority::High);

        Self {
            percentage: result.percentage,
            percentage_label: format!("{}%", result.percentage),
            progress: f32::from(result.percentage) / 100.0,
            outcome: result.outcome,
            label: outcome_headline(result.outcome),
            message: outcome_message(result.outcome),
            theme,
            theme_color: theme.hex(),
            high_priority: high.into_iter().map(RecommendationView::from).collect(),
            additional: additional.into_iter().map(RecommendationView::from).collect(),
        }
    }
}
