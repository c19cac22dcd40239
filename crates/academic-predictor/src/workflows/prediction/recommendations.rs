//! Advisory messages derived from a scored questionnaire.
//!
//! Rules run in table order and each one appends its message when its guard holds, so a
//! record may collect anything from zero to every entry. The grade-average guards cover
//! disjoint ranges and the two trend guards can never hold together.

use super::domain::{
    Answer, MaritalStatus, PriorQualification, QuestionnaireRecord, StudentType, TuitionStatus,
};
use super::scoring::PredictionResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

/// Symbolic icon; the renderer decides how each one is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationIcon {
    AcademicSupport,
    Performance,
    Excellence,
    TrendUp,
    TrendDown,
    Finance,
    YoungLearner,
    AdultLearner,
    SupportServices,
    Accessibility,
    Globe,
    Family,
    Foundations,
    Schedule,
}

impl RecommendationIcon {
    pub const fn tag(self) -> &'static str {
        match self {
            RecommendationIcon::AcademicSupport => "life-ring",
            RecommendationIcon::Performance => "chart-line",
            RecommendationIcon::Excellence => "trophy",
            RecommendationIcon::TrendUp => "arrow-trend-up",
            RecommendationIcon::TrendDown => "arrow-trend-down",
            RecommendationIcon::Finance => "money-bill",
            RecommendationIcon::YoungLearner => "user-graduate",
            RecommendationIcon::AdultLearner => "briefcase",
            RecommendationIcon::SupportServices => "hands-helping",
            RecommendationIcon::Accessibility => "universal-access",
            RecommendationIcon::Globe => "globe",
            RecommendationIcon::Family => "home",
            RecommendationIcon::Foundations => "book-open",
            RecommendationIcon::Schedule => "calendar-check",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub icon: RecommendationIcon,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

type Guard = fn(&QuestionnaireRecord, &PredictionResult) -> bool;

struct RecommendationRule {
    guard: Guard,
    priority: Priority,
    icon: RecommendationIcon,
    title: &'static str,
    description: &'static str,
}

impl RecommendationRule {
    fn build(&self) -> Recommendation {
        Recommendation {
            icon: self.icon,
            title: self.title.to_string(),
            description: self.description.to_string(),
            priority: self.priority,
        }
    }
}

const RULES: [RecommendationRule; 14] = [
    RecommendationRule {
        guard: |record, _| record.grade_average() < 10.0,
        priority: Priority::High,
        icon: RecommendationIcon::AcademicSupport,
        title: "Seek Critical Academic Support",
        description: "Your average grade is below the passing mark. Book tutoring sessions and meet your academic advisor as soon as possible.",
    },
    RecommendationRule {
        guard: |record, _| {
            let average = record.grade_average();
            (10.0..14.0).contains(&average)
        },
        priority: Priority::High,
        icon: RecommendationIcon::Performance,
        title: "Improve Academic Performance",
        description: "Your grades are passing but leave little margin. Join study groups and review course material every week.",
    },
    RecommendationRule {
        guard: |record, _| record.grade_average() >= 16.0,
        priority: Priority::Medium,
        icon: RecommendationIcon::Excellence,
        title: "Maintain Your Excellence",
        description: "Your grades are excellent. Consider mentoring peers or applying for honours and research programmes.",
    },
    RecommendationRule {
        guard: |record, _| record.second_semester_grade > record.first_semester_grade + 1.0,
        priority: Priority::Medium,
        icon: RecommendationIcon::TrendUp,
        title: "Build on Your Positive Trend",
        description: "Your grades improved from the first to the second semester. Keep the study habits that got you here.",
    },
    RecommendationRule {
        guard: |record, _| record.first_semester_grade > record.second_semester_grade + 1.0,
        priority: Priority::High,
        icon: RecommendationIcon::TrendDown,
        title: "Address Your Declining Grades",
        description: "Your grades dropped in the second semester. Identify the courses that slipped and ask instructors for feedback early.",
    },
    RecommendationRule {
        guard: |record, _| record.tuition == TuitionStatus::Unpaid,
        priority: Priority::High,
        icon: RecommendationIcon::Finance,
        title: "Resolve Tuition Payments",
        description: "Outstanding tuition can block enrolment. Contact the financial aid office about payment plans, grants, or scholarships.",
    },
    RecommendationRule {
        guard: |record, _| record.enrollment_age < 18.0,
        priority: Priority::Medium,
        icon: RecommendationIcon::YoungLearner,
        title: "Connect with Younger-Student Support",
        description: "Students who enrol early benefit from orientation programmes and peer mentoring. Reach out to student life services.",
    },
    RecommendationRule {
        guard: |record, _| record.enrollment_age > 25.0,
        priority: Priority::Medium,
        icon: RecommendationIcon::AdultLearner,
        title: "Use Adult Learner Resources",
        description: "Flexible schedules, evening classes, and adult learner networks can help you balance study with other commitments.",
    },
    RecommendationRule {
        guard: |record, _| record.displaced == Answer::Yes,
        priority: Priority::High,
        icon: RecommendationIcon::SupportServices,
        title: "Contact Student Support Services",
        description: "Studying away from home is demanding. Ask student services about housing assistance, counselling, and community groups.",
    },
    RecommendationRule {
        guard: |record, _| record.special_needs == Answer::Yes,
        priority: Priority::High,
        icon: RecommendationIcon::Accessibility,
        title: "Register with Disability Services",
        description: "Register with the disability services office to arrange accommodations for classes and examinations.",
    },
    RecommendationRule {
        guard: |record, _| record.student_type == StudentType::International,
        priority: Priority::Medium,
        icon: RecommendationIcon::Globe,
        title: "Use International Student Services",
        description: "The international office can help with visas, language support, and settling into a new academic culture.",
    },
    RecommendationRule {
        guard: |record, _| record.marital_status != MaritalStatus::Single,
        priority: Priority::Medium,
        icon: RecommendationIcon::Family,
        title: "Balance Family and Study Commitments",
        description: "Plan study time around family responsibilities and ask about childcare support or part-time study options.",
    },
    RecommendationRule {
        guard: |record, _| {
            matches!(
                record.prior_qualification,
                PriorQualification::HighSchool | PriorQualification::Vocational
            )
        },
        priority: Priority::Medium,
        icon: RecommendationIcon::Foundations,
        title: "Strengthen Foundational Skills",
        description: "Bridging courses in writing, mathematics, and study skills make the step up to university-level work easier.",
    },
    RecommendationRule {
        guard: |_, result| result.outcome.is_at_risk(),
        priority: Priority::High,
        icon: RecommendationIcon::Schedule,
        title: "Follow a Structured Study Schedule",
        description: "Set fixed weekly study blocks, track deadlines in one calendar, and check in with an advisor every month.",
    },
];

/// Pure rule table evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn recommend(
        &self,
        record: &QuestionnaireRecord,
        result: &PredictionResult,
    ) -> Vec<Recommendation> {
        RULES
            .iter()
            .filter(|rule| (rule.guard)(record, result))
            .map(RecommendationRule::build)
            .collect()
    }
}
