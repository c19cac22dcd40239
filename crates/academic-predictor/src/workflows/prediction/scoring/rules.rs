use super::super::domain::{
    Answer, MaritalStatus, Motivation, Occupation, ParentEducation, PriorQualification,
    QuestionnaireRecord, StudentType, TuitionStatus,
};
use super::config::ScoringScheme;
use super::{ScoreComponent, ScoreFactor};

const SEMESTER_WEIGHT: f64 = 35.0;
const GRADE_SCALE: f64 = 20.0;
const POINTS_PER_ACTIVITY: f64 = 3.0;

struct ScoreSheet {
    components: Vec<ScoreComponent>,
    total: f64,
}

impl ScoreSheet {
    fn new(scheme: ScoringScheme) -> Self {
        let base = scheme.base_score();
        Self {
            components: vec![ScoreComponent {
                factor: ScoreFactor::Base,
                points: base,
                notes: format!("{} scheme starting score", scheme.label()),
            }],
            total: base,
        }
    }

    fn add(&mut self, factor: ScoreFactor, points: f64, notes: String) {
        self.total += points;
        self.components.push(ScoreComponent {
            factor,
            points,
            notes,
        });
    }
}

pub(crate) fn score_record(
    record: &QuestionnaireRecord,
    scheme: ScoringScheme,
) -> (Vec<ScoreComponent>, f64) {
    let sheet = match scheme {
        ScoringScheme::Baseline => baseline_sheet(record),
        ScoringScheme::Academic => academic_sheet(record),
    };
    (sheet.components, sheet.total)
}

fn baseline_sheet(record: &QuestionnaireRecord) -> ScoreSheet {
    let mut sheet = ScoreSheet::new(ScoringScheme::Baseline);

    sheet.add(
        ScoreFactor::Motivation,
        motivation_points(record.motivation),
        format!("motivation {:?}", record.motivation),
    );
    sheet.add(
        ScoreFactor::ParentEducation,
        parent_education_points(record.parent_education),
        format!("parent education {:?}", record.parent_education),
    );

    let counted = counted_activities(record);
    sheet.add(
        ScoreFactor::Extracurricular,
        counted as f64 * POINTS_PER_ACTIVITY,
        format!("{counted} extracurricular activit(ies) counted"),
    );

    sheet.add(
        ScoreFactor::FatherOccupation,
        baseline_occupation_points(record.father_occupation),
        format!("father occupation {:?}", record.father_occupation),
    );
    sheet.add(
        ScoreFactor::MotherOccupation,
        baseline_occupation_points(record.mother_occupation),
        format!("mother occupation {:?}", record.mother_occupation),
    );

    let tuition = match record.tuition {
        TuitionStatus::FullyPaid => 10.0,
        TuitionStatus::PartiallyPaid => 5.0,
        TuitionStatus::Loan => -3.0,
        _ => 0.0,
    };
    sheet.add(
        ScoreFactor::Tuition,
        tuition,
        format!("tuition {:?}", record.tuition),
    );

    let student_type = match record.student_type {
        StudentType::International => 3.0,
        _ => 0.0,
    };
    sheet.add(
        ScoreFactor::StudentType,
        student_type,
        format!("student type {:?}", record.student_type),
    );

    let marital = match record.marital_status {
        MaritalStatus::Single => 5.0,
        MaritalStatus::Married => -5.0,
        _ => 0.0,
    };
    sheet.add(
        ScoreFactor::MaritalStatus,
        marital,
        format!("marital status {:?}", record.marital_status),
    );

    sheet
}

fn academic_sheet(record: &QuestionnaireRecord) -> ScoreSheet {
    let mut sheet = ScoreSheet::new(ScoringScheme::Academic);

    sheet.add(
        ScoreFactor::FirstSemesterGrade,
        semester_points(record.first_semester_grade),
        format!("first semester grade {:.1}/20", record.first_semester_grade),
    );
    sheet.add(
        ScoreFactor::SecondSemesterGrade,
        semester_points(record.second_semester_grade),
        format!("second semester grade {:.1}/20", record.second_semester_grade),
    );

    let qualification = match record.prior_qualification {
        PriorQualification::Bachelor | PriorQualification::Master => 8.0,
        PriorQualification::HighSchool => 5.0,
        _ => 3.0,
    };
    sheet.add(
        ScoreFactor::PriorQualification,
        qualification,
        format!("prior qualification {:?}", record.prior_qualification),
    );

    let tuition = match record.tuition {
        TuitionStatus::FullyPaid => 7.0,
        TuitionStatus::Scholarship => 6.0,
        _ => 2.0,
    };
    sheet.add(
        ScoreFactor::Tuition,
        tuition,
        format!("tuition {:?}", record.tuition),
    );

    let father = academic_occupation_points(record.father_occupation);
    let mother = academic_occupation_points(record.mother_occupation);
    let (points, parent, occupation) = if mother > father {
        (mother, "mother", record.mother_occupation)
    } else {
        (father, "father", record.father_occupation)
    };
    sheet.add(
        ScoreFactor::ParentOccupation,
        points,
        format!("{parent} occupation {occupation:?} (stronger of both parents)"),
    );

    sheet.add(
        ScoreFactor::EnrollmentAge,
        enrollment_age_points(record.enrollment_age),
        format!("enrolled at age {:.0}", record.enrollment_age),
    );

    let student_type = match record.student_type {
        StudentType::National => 3.0,
        _ => 2.0,
    };
    sheet.add(
        ScoreFactor::StudentType,
        student_type,
        format!("student type {:?}", record.student_type),
    );

    let marital = match record.marital_status {
        MaritalStatus::Single => 2.0,
        _ => 1.0,
    };
    sheet.add(
        ScoreFactor::MaritalStatus,
        marital,
        format!("marital status {:?}", record.marital_status),
    );

    let displaced = match record.displaced {
        Answer::No => 1.0,
        _ => 0.0,
    };
    sheet.add(
        ScoreFactor::Displaced,
        displaced,
        format!("displaced {:?}", record.displaced),
    );

    sheet
}

pub(crate) fn motivation_points(motivation: Motivation) -> f64 {
    match motivation {
        Motivation::High => 25.0,
        Motivation::Medium => 10.0,
        Motivation::Low => -15.0,
        Motivation::Unspecified => 0.0,
    }
}

pub(crate) fn parent_education_points(education: ParentEducation) -> f64 {
    match education {
        ParentEducation::Doctorate => 15.0,
        ParentEducation::Master => 12.0,
        ParentEducation::Bachelor => 10.0,
        ParentEducation::Associate => 7.0,
        ParentEducation::HighSchool => 5.0,
        ParentEducation::LessThanHighSchool => 2.0,
        ParentEducation::Unspecified => 0.0,
    }
}

pub(crate) fn baseline_occupation_points(occupation: Occupation) -> f64 {
    match occupation {
        Occupation::Professional => 8.0,
        Occupation::Business | Occupation::Government => 7.0,
        Occupation::SkilledWorker | Occupation::SelfEmployed => 5.0,
        Occupation::Homemaker | Occupation::Retired | Occupation::Other => 3.0,
        Occupation::Manager | Occupation::Unemployed | Occupation::Unspecified => 0.0,
    }
}

pub(crate) fn academic_occupation_points(occupation: Occupation) -> f64 {
    match occupation {
        Occupation::Professional | Occupation::Manager => 5.0,
        Occupation::SkilledWorker => 3.0,
        _ => 2.0,
    }
}

/// Activities only count when the student listed some and did not also tick "none".
pub(crate) fn counted_activities(record: &QuestionnaireRecord) -> usize {
    let activities = &record.extracurricular;
    if activities.is_empty() || activities.declares_none() {
        0
    } else {
        activities.len()
    }
}

pub(crate) fn semester_points(grade: f64) -> f64 {
    (grade / GRADE_SCALE) * SEMESTER_WEIGHT
}

pub(crate) fn enrollment_age_points(age: f64) -> f64 {
    if (18.0..=22.0).contains(&age) {
        4.0
    } else if age < 18.0 || (age > 22.0 && age <= 25.0) {
        2.0
    } else {
        1.0
    }
}
