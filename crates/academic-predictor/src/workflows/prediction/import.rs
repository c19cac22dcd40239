use super::intake::QuestionnaireForm;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

const ACTIVITY_SEPARATOR: char = ';';

#[derive(Debug)]
pub enum QuestionnaireImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for QuestionnaireImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionnaireImportError::Io(err) => {
                write!(f, "failed to read questionnaire export: {}", err)
            }
            QuestionnaireImportError::Csv(err) => {
                write!(f, "invalid questionnaire CSV data: {}", err)
            }
        }
    }
}

impl std::error::Error for QuestionnaireImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuestionnaireImportError::Io(err) => Some(err),
            QuestionnaireImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for QuestionnaireImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for QuestionnaireImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One CSV row turned into a form, tagged with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedQuestionnaire {
    /// 1-based data row, header excluded.
    pub row: usize,
    pub student_id: Option<String>,
    pub form: QuestionnaireForm,
}

/// Reads questionnaire exports whose headers match the form field names.
pub struct QuestionnaireImporter;

impl QuestionnaireImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<ImportedQuestionnaire>, QuestionnaireImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<ImportedQuestionnaire>, QuestionnaireImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut imported = Vec::new();

        for (index, record) in csv_reader.deserialize::<QuestionnaireRow>().enumerate() {
            let row = record?;
            imported.push(ImportedQuestionnaire {
                row: index + 1,
                student_id: row.student_id.clone(),
                form: row.into_form(),
            });
        }

        Ok(imported)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QuestionnaireRow {
    student_id: Option<String>,
    gender: Option<String>,
    marital_status: Option<String>,
    student_type: Option<String>,
    prior_qualification: Option<String>,
    tuition: Option<String>,
    father_occupation: Option<String>,
    mother_occupation: Option<String>,
    displaced: Option<String>,
    special_needs: Option<String>,
    motivation: Option<String>,
    parent_education: Option<String>,
    enrollment_age: Option<String>,
    first_semester_grade: Option<String>,
    second_semester_grade: Option<String>,
    extracurricular: Option<String>,
}

impl QuestionnaireRow {
    fn into_form(self) -> QuestionnaireForm {
        let extracurricular = self
            .extracurricular
            .as_deref()
            .map(|raw| {
                raw.split(ACTIVITY_SEPARATOR)
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

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
            extracurricular,
        }
    }
}
