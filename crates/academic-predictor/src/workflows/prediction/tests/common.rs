use std::sync::Arc;

use crate::workflows::prediction::domain::{
    ActivitySet, Answer, MaritalStatus, Motivation, Occupation, ParentEducation,
    PriorQualification, QuestionnaireRecord, StudentType, TuitionStatus,
};
use crate::workflows::prediction::intake::QuestionnaireForm;
use crate::workflows::prediction::scoring::{Outcome, PredictionResult, ScoringScheme};
use crate::workflows::prediction::{prediction_router, PredictionPipeline, Recommendation};

/// Academic-scheme record that triggers no recommendation at all (scores 80, Graduate).
pub(super) fn neutral_record() -> QuestionnaireRecord {
    QuestionnaireRecord {
        marital_status: MaritalStatus::Single,
        student_type: StudentType::National,
        prior_qualification: PriorQualification::Bachelor,
        tuition: TuitionStatus::FullyPaid,
        displaced: Answer::No,
        special_needs: Answer::No,
        enrollment_age: 20.0,
        first_semester_grade: 15.0,
        second_semester_grade: 15.0,
        ..QuestionnaireRecord::default()
    }
}

pub(super) fn graduate_result() -> PredictionResult {
    PredictionResult {
        percentage: 80,
        outcome: Outcome::Graduate,
        scheme: ScoringScheme::Academic,
    }
}

/// Flat-weight profile that sums to 129 before clamping.
pub(super) fn baseline_example_record() -> QuestionnaireRecord {
    QuestionnaireRecord {
        motivation: Motivation::High,
        parent_education: ParentEducation::Doctorate,
        extracurricular: ActivitySet::collect(["debate", "sports"]),
        father_occupation: Occupation::Professional,
        mother_occupation: Occupation::Business,
        tuition: TuitionStatus::FullyPaid,
        student_type: StudentType::International,
        marital_status: MaritalStatus::Single,
        ..QuestionnaireRecord::default()
    }
}

/// Adds up to 28 academic points before grades are counted.
pub(super) fn academic_profile(first: f64, second: f64) -> QuestionnaireRecord {
    QuestionnaireRecord {
        prior_qualification: PriorQualification::Bachelor,
        tuition: TuitionStatus::FullyPaid,
        father_occupation: Occupation::Professional,
        enrollment_age: 20.0,
        student_type: StudentType::National,
        marital_status: MaritalStatus::Married,
        first_semester_grade: first,
        second_semester_grade: second,
        ..QuestionnaireRecord::default()
    }
}

pub(super) fn strong_form() -> QuestionnaireForm {
    QuestionnaireForm {
        gender: Some("female".to_string()),
        marital_status: Some("single".to_string()),
        student_type: Some("national".to_string()),
        prior_qualification: Some("bachelor".to_string()),
        tuition: Some("yes".to_string()),
        father_occupation: Some("professional".to_string()),
        mother_occupation: Some("skilled-worker".to_string()),
        displaced: Some("no".to_string()),
        special_needs: Some("no".to_string()),
        motivation: Some("high".to_string()),
        parent_education: Some("master".to_string()),
        enrollment_age: Some("20".to_string()),
        first_semester_grade: Some("17".to_string()),
        second_semester_grade: Some("18".to_string()),
        extracurricular: vec!["debate".to_string(), "sports".to_string()],
    }
}

pub(super) fn router() -> axum::Router {
    prediction_router(Arc::new(PredictionPipeline::new(ScoringScheme::Academic)))
}

pub(super) fn titles(recommendations: &[Recommendation]) -> Vec<&str> {
    recommendations
        .iter()
        .map(|recommendation| recommendation.title.as_str())
        .collect()
}
