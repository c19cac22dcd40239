use crate::infra::parse_scheme;
use academic_predictor::config::AppConfig;
use academic_predictor::error::AppError;
use academic_predictor::workflows::prediction::{
    PredictionPipeline, PredictionReport, QuestionnaireForm, QuestionnaireImporter,
    ScoringScheme,
};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Questionnaire answers as command-line flags; omitted flags count as unanswered.
#[derive(Args, Debug, Default)]
pub(crate) struct AnswerArgs {
    #[arg(long)]
    pub(crate) gender: Option<String>,
    #[arg(long)]
    pub(crate) marital_status: Option<String>,
    /// national or international
    #[arg(long)]
    pub(crate) student_type: Option<String>,
    #[arg(long)]
    pub(crate) prior_qualification: Option<String>,
    /// fully-paid, partially-paid, scholarship, loan, or unpaid
    #[arg(long)]
    pub(crate) tuition: Option<String>,
    #[arg(long)]
    pub(crate) father_occupation: Option<String>,
    #[arg(long)]
    pub(crate) mother_occupation: Option<String>,
    #[arg(long)]
    pub(crate) displaced: Option<String>,
    #[arg(long)]
    pub(crate) special_needs: Option<String>,
    /// high, medium, or low
    #[arg(long)]
    pub(crate) motivation: Option<String>,
    #[arg(long)]
    pub(crate) parent_education: Option<String>,
    #[arg(long)]
    pub(crate) enrollment_age: Option<String>,
    /// First semester grade on the 0-20 scale
    #[arg(long)]
    pub(crate) first_semester_grade: Option<String>,
    /// Second semester grade on the 0-20 scale
    #[arg(long)]
    pub(crate) second_semester_grade: Option<String>,
    /// Extracurricular activity; repeat or comma-separate, use "none" for none
    #[arg(long = "activity", value_delimiter = ',')]
    pub(crate) activity: Vec<String>,
}

impl AnswerArgs {
    fn into_form(self) -> QuestionnaireForm {
        QuestionnaireForm {
            gender: self.gender,
            marital_status: self.marital_status,
            student_type: self.student_type,
            prior_qualification: self.prior_qualification,
            tuition: self.tuition,
            father_occupation: self.father_occupation,
            mother_occupation: self.mother_occupation,
            displaced: self.displaced,
            special_needs: self.special_needs,
            motivation: self.motivation,
            parent_education: self.parent_education,
            enrollment_age: self.enrollment_age,
            first_semester_grade: self.first_semester_grade,
            second_semester_grade: self.second_semester_grade,
            extracurricular: self.activity,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct PredictArgs {
    #[command(flatten)]
    pub(crate) answers: AnswerArgs,
    /// Scoring scheme (academic or baseline); defaults to APP_SCORING_SCHEME
    #[arg(long, value_parser = parse_scheme)]
    pub(crate) scheme: Option<ScoringScheme>,
    /// Print the full report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one questionnaire per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Scoring scheme (academic or baseline); defaults to APP_SCORING_SCHEME
    #[arg(long, value_parser = parse_scheme)]
    pub(crate) scheme: Option<ScoringScheme>,
    /// Print every report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Scoring scheme (academic or baseline); defaults to APP_SCORING_SCHEME
    #[arg(long, value_parser = parse_scheme)]
    pub(crate) scheme: Option<ScoringScheme>,
}

#[derive(Debug, Serialize)]
struct BatchEntry {
    row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    student_id: Option<String>,
    report: PredictionReport,
}

fn resolve_scheme(requested: Option<ScoringScheme>) -> Result<ScoringScheme, AppError> {
    match requested {
        Some(scheme) => Ok(scheme),
        None => Ok(AppConfig::load()?.scoring.scheme),
    }
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let PredictArgs {
        answers,
        scheme,
        json,
    } = args;

    let pipeline = PredictionPipeline::new(resolve_scheme(scheme)?);
    let report = pipeline.run_form(answers.into_form());

    if json {
        print_json(&report);
    } else {
        render_prediction(&report);
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs { csv, scheme, json } = args;

    let pipeline = PredictionPipeline::new(resolve_scheme(scheme)?);
    let imported = QuestionnaireImporter::from_path(&csv)?;

    let entries: Vec<BatchEntry> = imported
        .into_iter()
        .map(|row| BatchEntry {
            row: row.row,
            student_id: row.student_id,
            report: pipeline.run_form(row.form),
        })
        .collect();

    if json {
        print_json(&entries);
        return Ok(());
    }

    println!(
        "Scored {} questionnaire(s) from {} ({} scheme)",
        entries.len(),
        csv.display(),
        pipeline.scheme()
    );
    for entry in &entries {
        let who = entry
            .student_id
            .as_deref()
            .map(|id| format!(" ({id})"))
            .unwrap_or_default();
        let high = entry.report.view.high_priority.len();
        println!(
            "- row {}{}: {} | {} high priority, {} additional recommendation(s)",
            entry.row,
            who,
            entry.report.summary(),
            high,
            entry.report.view.additional.len()
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let pipeline = PredictionPipeline::new(resolve_scheme(args.scheme)?);

    println!("Academic future predictor demo ({} scheme)", pipeline.scheme());
    for (name, form) in demo_forms() {
        println!("\n=== {name} ===");
        let report = pipeline.run_form(form);
        render_prediction(&report);
    }

    Ok(())
}

fn demo_forms() -> Vec<(&'static str, QuestionnaireForm)> {
    let answer = |value: &str| Some(value.to_string());

    vec![
        (
            "Motivated national student",
            QuestionnaireForm {
                gender: answer("female"),
                marital_status: answer("single"),
                student_type: answer("national"),
                prior_qualification: answer("bachelor"),
                tuition: answer("fully-paid"),
                father_occupation: answer("professional"),
                mother_occupation: answer("business"),
                displaced: answer("no"),
                special_needs: answer("no"),
                motivation: answer("high"),
                parent_education: answer("master"),
                enrollment_age: answer("19"),
                first_semester_grade: answer("16.5"),
                second_semester_grade: answer("17.2"),
                extracurricular: vec!["debate".to_string(), "volunteering".to_string()],
            },
        ),
        (
            "International student finding their feet",
            QuestionnaireForm {
                gender: answer("male"),
                marital_status: answer("single"),
                student_type: answer("international"),
                prior_qualification: answer("high-school"),
                tuition: answer("scholarship"),
                father_occupation: answer("skilled-worker"),
                mother_occupation: answer("homemaker"),
                displaced: answer("yes"),
                special_needs: answer("no"),
                motivation: answer("medium"),
                parent_education: answer("high-school"),
                enrollment_age: answer("21"),
                first_semester_grade: answer("11"),
                second_semester_grade: answer("13"),
                extracurricular: vec!["sports".to_string()],
            },
        ),
        (
            "Working adult returning to study",
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
            },
        ),
    ]
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("JSON output unavailable: {err}"),
    }
}

pub(crate) fn render_prediction(report: &PredictionReport) {
    let view = &report.view;
    println!("Prediction: {} ({})", view.label, view.percentage_label);
    println!("{}", view.message);

    println!("\nScore components");
    for component in &report.score.components {
        println!(
            "- {:?}: {:+.2} ({})",
            component.factor, component.points, component.notes
        );
    }

    if view.high_priority.is_empty() {
        println!("\nHigh priority recommendations: none");
    } else {
        println!("\nHigh priority recommendations");
        for item in &view.high_priority {
            println!("- [{}] {}: {}", item.icon, item.title, item.description);
        }
    }

    if view.additional.is_empty() {
        println!("\nAdditional recommendations: none");
    } else {
        println!("\nAdditional recommendations");
        for item in &view.additional {
            println!("- [{}] {}: {}", item.icon, item.title, item.description);
        }
    }
}
