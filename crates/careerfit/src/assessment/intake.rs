//! Answer intake from `QuestionID,Answer` CSV files.
//!
//! The layout matches what [`super::export::answers_csv`] produces, so a
//! sheet exported from one session can be re-scored later from disk.

use super::domain::AnswerSheet;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answers file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answers CSV data: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(rename = "QuestionID")]
    question_id: String,
    #[serde(rename = "Answer", default)]
    answer: String,
}

pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AnswerSheet, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads answers from CSV, skipping rows whose answer cell is blank.
    /// Blank rows stand for unanswered questions in the exported layout.
    pub fn from_reader<R: Read>(reader: R) -> Result<AnswerSheet, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut sheet = AnswerSheet::new();

        for record in csv_reader.deserialize::<AnswerRow>() {
            let row = record?;
            if row.answer.is_empty() {
                continue;
            }

            sheet.record(row.question_id, row.answer);
        }

        Ok(sheet)
    }
}
