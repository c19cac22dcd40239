use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::domain::{
    ActivitySet, Answer, Gender, MaritalStatus, Motivation, Occupation, ParentEducation,
    PriorQualification, QuestionnaireRecord, StudentType, TuitionStatus,
};

/// Raw questionnaire fields exactly as a form posts them.
///
/// Every field is optional; blanks and unknown values fall back to the documented defaults
/// when the form is turned into a [`QuestionnaireRecord`], so intake never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireForm {
    #[serde(deserialize_with = "lenient_text")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub marital_status: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub student_type: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub prior_qualification: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub tuition: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub father_occupation: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub mother_occupation: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub displaced: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub special_needs: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub motivation: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub parent_education: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub enrollment_age: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub first_semester_grade: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub second_semester_grade: Option<String>,
    #[serde(deserialize_with = "lenient_activities")]
    pub extracurricular: Vec<String>,
}

impl QuestionnaireForm {
    pub fn into_record(self) -> QuestionnaireRecord {
        QuestionnaireRecord {
            gender: Gender::parse(text(&self.gender)),
            marital_status: MaritalStatus::parse(text(&self.marital_status)),
            student_type: StudentType::parse(text(&self.student_type)),
            prior_qualification: PriorQualification::parse(text(&self.prior_qualification)),
            tuition: TuitionStatus::parse(text(&self.tuition)),
            father_occupation: Occupation::parse(text(&self.father_occupation)),
            mother_occupation: Occupation::parse(text(&self.mother_occupation)),
            displaced: Answer::parse(text(&self.displaced)),
            special_needs: Answer::parse(text(&self.special_needs)),
            motivation: Motivation::parse(text(&self.motivation)),
            parent_education: ParentEducation::parse(text(&self.parent_education)),
            enrollment_age: parse_number(text(&self.enrollment_age)).max(0.0),
            first_semester_grade: parse_number(text(&self.first_semester_grade)),
            second_semester_grade: parse_number(text(&self.second_semester_grade)),
            extracurricular: ActivitySet::collect(&self.extracurricular),
        }
    }
}

impl From<QuestionnaireForm> for QuestionnaireRecord {
    fn from(form: QuestionnaireForm) -> Self {
        form.into_record()
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

/// Unparsable, blank, or non-finite input reads as zero.
pub(crate) fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Accept strings, numbers, and booleans alike so JSON clients need not quote numbers.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => Some(raw),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Accept a list, a lone tag, or null for the activity checkboxes.
fn lenient_activities<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.into_iter().filter_map(activity_tag).collect(),
        Some(other) => activity_tag(other).into_iter().collect(),
    })
}

fn activity_tag(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(tag) => Some(tag),
        other => Some(other.to_string()),
    }
}
