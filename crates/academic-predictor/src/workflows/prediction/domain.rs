use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Tag a student ticks when they take part in no extracurricular activity.
pub const NO_ACTIVITIES: &str = "none";

/// Lower-case, trim, and fold `_`/spaces into `-` so form values match one spelling.
pub(crate) fn normalize_token(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|ch| if ch == '_' || ch == ' ' { '-' } else { ch })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    Unspecified,
}

impl Gender {
    pub fn parse(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            "other" | "non-binary" => Self::Other,
            _ => Self::Unspecified,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    Separated,
    Other,
    #[default]
    Unspecified,
}

impl MaritalStatus {
    pub fn parse(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "single" => Self::Single,
            "married" => Self::Married,
            "divorced" => Self::Divorced,
            "widowed" | "widow" | "widower" => Self::Widowed,
            "separated" => Self::Separated,
            "other" => Self::Other,
            _ => Self::Unspecified,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudentType {
    National,
    International,
    #[default]
    Unspecified,
}

impl StudentType {
    pub fn parse(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "national" | "domestic" => Self::National,
            "international" => Self::International,
            _ => Self::Unspecified,
        }
    }
}

/// Highest qualification held before enrolling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorQualification {
    HighSchool,
    Vocational,
    Bachelor,
    Master,
    Doctorate,
    Other,
    #[default]
    Unspecified,
}

impl PriorQualification {
    pub fn parse(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "high-school" | "secondary" => Self::HighSchool,
            "vocational" => Self::Vocational,
            "bachelor" => Self::Bachelor,
            "master" => Self::Master,
            "doctorate" => Self::Doctorate,
            "other" => Self::Other,
            _ => Self::Unspecified,
        }
    }
}

/// Whether tuition fees are settled and how.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TuitionStatus {
    FullyPaid,
    PartiallyPaid,
    Scholarship,
    Loan,
    Unpaid,
    #[default]
    Unspecified,
}

impl TuitionStatus {
    pub fn parse(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "fully-paid" | "yes" | "paid" | "up-to-date" => Self::FullyPaid,
            "partially-paid" => Self::PartiallyPaid,
            "scholarship" => Self::Scholarship,
            "loan" => Self::Loan,
            "unpaid" | "no" => Self::Unpaid,
            _ => Self::Unspecified,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Occupation {
    Professional,
    Manager,
    Business,
    Government,
    SkilledWorker,
    SelfEmployed,
    Homemaker,
    Retired,
    Unemployed,
    Other,
    #[default]
    Unspecified,
}

impl Occupation {
    pub fn parse(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "professional" => Self::Professional,
            "manager" => Self::Manager,
            "business" => Self::Business,
            "government" => Self::Government,
            "skilled-worker" | "skilled" => Self::SkilledWorker,
            "self-employed" => Self::SelfEmployed,
            "homemaker" => Self::Homemaker,
            "retired" => Self::Retired,
            "unemployed" => Self::Unemployed,
            "other" => Self::Other,
            _ => Self::Unspecified,
        }
    }
}

/// Yes/no question that may be left blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Answer {
    Yes,
    No,
    #[default]
    Unspecified,
}

impl Answer {
    pub fn parse(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "yes" | "y" | "true" | "1" => Self::Yes,
            "no" | "n" | "false" | "0" => Self::No,
            _ => Self::Unspecified,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Motivation {
    High,
    Medium,
    Low,
    #[default]
    Unspecified,
}

impl Motivation {
    pub fn parse(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Unspecified,
        }
    }
}

/// Highest education level reached by either parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParentEducation {
    Doctorate,
    Master,
    Bachelor,
    Associate,
    HighSchool,
    LessThanHighSchool,
    #[default]
    Unspecified,
}

impl ParentEducation {
    pub fn parse(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "doctorate" => Self::Doctorate,
            "master" => Self::Master,
            "bachelor" => Self::Bachelor,
            "associate" => Self::Associate,
            "high-school" => Self::HighSchool,
            "less-than-high-school" | "below-high-school" => Self::LessThanHighSchool,
            _ => Self::Unspecified,
        }
    }
}

/// Extracurricular activity tags, normalised and ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivitySet(pub BTreeSet<String>);

impl ActivitySet {
    /// Normalise raw checkbox values. `"none"` next to real activities collapses the set to
    /// just `"none"`, mirroring the form where ticking it clears every other box.
    pub fn collect<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags: BTreeSet<String> = tags
            .into_iter()
            .map(|tag| normalize_token(tag.as_ref()))
            .filter(|tag| !tag.is_empty())
            .collect();

        if tags.contains(NO_ACTIVITIES) {
            return Self(BTreeSet::from([NO_ACTIVITIES.to_string()]));
        }

        Self(tags)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn declares_none(&self) -> bool {
        self.0.contains(NO_ACTIVITIES)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Validated snapshot of one student's questionnaire answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireRecord {
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub student_type: StudentType,
    pub prior_qualification: PriorQualification,
    pub tuition: TuitionStatus,
    pub father_occupation: Occupation,
    pub mother_occupation: Occupation,
    pub displaced: Answer,
    pub special_needs: Answer,
    pub motivation: Motivation,
    pub parent_education: ParentEducation,
    pub enrollment_age: f64,
    pub first_semester_grade: f64,
    pub second_semester_grade: f64,
    pub extracurricular: ActivitySet,
}

impl QuestionnaireRecord {
    pub fn grade_average(&self) -> f64 {
        (self.first_semester_grade + self.second_semester_grade) / 2.0
    }
}
