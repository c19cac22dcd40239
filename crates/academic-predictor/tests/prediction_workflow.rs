use academic_predictor::workflows::prediction::{
    Outcome, PredictionPipeline, Priority, QuestionnaireForm, QuestionnaireImportError,
    QuestionnaireImporter, ResultTheme, ScoringScheme,
};

fn answer(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn returning_adult_form() -> QuestionnaireForm {
    QuestionnaireForm {
        gender: answer("female"),
        marital_status: answer("married"),
        student_type: answer("national"),
        prior_qualification: answer("vocational"),
        tuition: answer("unpaid"),
        father_occupation: answer("retired"),
        mother_occupation: answer("unemployed"),
        displaced: answer("no"),
        special_needs: answer("yes"),
        motivation: answer("low"),
        parent_education: answer("less-than-high-school"),
        enrollment_age: answer("34"),
        first_semester_grade: answer("10"),
        second_semester_grade: answer("7.5"),
        extracurricular: vec!["none".to_string()],
    }
}

#[test]
fn struggling_student_gets_grouped_recommendations() {
    let report = PredictionPipeline::new(ScoringScheme::Academic).run_form(returning_adult_form());

    assert_eq!(report.score.result.percentage, 44);
    assert_eq!(report.score.result.outcome, Outcome::DropOut);
    assert_eq!(report.view.theme, ResultTheme::Red);
    assert_eq!(report.view.label, "At Risk");

    let titles: Vec<&str> = report
        .recommendations
        .iter()
        .map(|recommendation| recommendation.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Seek Critical Academic Support",
            "Address Your Declining Grades",
            "Resolve Tuition Payments",
            "Use Adult Learner Resources",
            "Register with Disability Services",
            "Balance Family and Study Commitments",
            "Strengthen Foundational Skills",
            "Follow a Structured Study Schedule",
        ]
    );

    let high = report
        .recommendations
        .iter()
        .filter(|recommendation| recommendation.priority == Priority::High)
        .count();
    assert_eq!(report.view.high_priority.len(), high);
    assert_eq!(report.view.high_priority.len(), 5);
    assert_eq!(report.view.additional.len(), 3);
}

#[test]
fn baseline_scheme_scores_the_same_form_differently() {
    let report = PredictionPipeline::new(ScoringScheme::Baseline).run_form(returning_adult_form());

    assert_eq!(report.score.result.scheme, ScoringScheme::Baseline);
    assert_eq!(report.score.result.percentage, 35);
    assert_eq!(report.score.result.outcome, Outcome::DropOut);
    assert_eq!(report.summary(), "Drop Out (35%, baseline scheme)");
}

#[test]
fn csv_export_scores_every_row() {
    let path = std::env::temp_dir().join(format!(
        "academic-predictor-import-{}.csv",
        std::process::id()
    ));
    let csv = "student_id,motivation,tuition,first_semester_grade,second_semester_grade,extracurricular\n\
s-1,high,fully-paid,17,18,debate;sports\n\
s-2,low,unpaid,6,5,none\n";
    std::fs::write(&path, csv).expect("write export");

    let imported = QuestionnaireImporter::from_path(&path).expect("export imports");
    std::fs::remove_file(&path).ok();

    assert_eq!(imported.len(), 2);
    assert_eq!(imported[0].student_id.as_deref(), Some("s-1"));
    assert_eq!(
        imported[0].form.extracurricular,
        vec!["debate".to_string(), "sports".to_string()]
    );

    let pipeline = PredictionPipeline::new(ScoringScheme::Baseline);
    let outcomes: Vec<Outcome> = imported
        .into_iter()
        .map(|row| pipeline.run_form(row.form).score.result.outcome)
        .collect();
    assert_eq!(outcomes, vec![Outcome::Graduate, Outcome::DropOut]);
}

#[test]
fn missing_export_is_an_io_error() {
    let path = std::env::temp_dir().join("academic-predictor-does-not-exist.csv");
    let err = QuestionnaireImporter::from_path(&path).expect_err("missing file fails");
    assert!(matches!(err, QuestionnaireImportError::Io(_)));
}
