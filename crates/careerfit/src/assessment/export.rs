//! Result export to the JSON and CSV layouts downstream tools expect.

use super::catalog::QuestionCatalog;
use super::domain::AnswerSheet;
use super::scoring::{DimensionScore, ScoreResult};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const RESULTS_FILE_NAME: &str = "hr_career_fit_results.json";
pub const ANSWERS_FILE_NAME: &str = "hr_career_fit_answers.csv";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize results payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not render answers CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Results payload written after an assessment, alongside the answers file.
///
/// Score vectors stay in instrument order; the answers map carries the raw
/// labels exactly as recorded, so a payload is enough to re-run scoring.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsExport {
    pub timestamp: String,
    pub top_functions: Vec<(String, f32)>,
    pub recommended_level: String,
    pub function_scores: Vec<DimensionScore>,
    pub trait_scores: Vec<DimensionScore>,
    pub answers: BTreeMap<String, String>,
}

impl ResultsExport {
    pub fn new(result: &ScoreResult, answers: &AnswerSheet, exported_at: DateTime<Utc>) -> Self {
        Self {
            timestamp: exported_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            top_functions: result
                .top_functions
                .iter()
                .map(|entry| (entry.dimension.clone(), entry.score))
                .collect(),
            recommended_level: result.level.clone(),
            function_scores: result.function_scores.clone(),
            trait_scores: result.trait_scores.clone(),
            answers: answers
                .iter()
                .map(|(id, label)| (id.to_string(), label.to_string()))
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the JSON payload into `directory` and returns the file path.
    pub fn write_json<P: AsRef<Path>>(&self, directory: P) -> Result<PathBuf, ExportError> {
        let directory = directory.as_ref();
        std::fs::create_dir_all(directory)?;

        let path = directory.join(RESULTS_FILE_NAME);
        std::fs::write(&path, self.to_json()?)?;
        Ok(path)
    }
}

/// Renders one `QuestionID,Answer` row per catalog question, in catalog
/// order, with an empty answer cell for unanswered questions.
pub fn answers_csv(
    catalog: &QuestionCatalog,
    answers: &AnswerSheet,
) -> Result<String, ExportError> {
    let mut buffer = Vec::new();

    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(["QuestionID", "Answer"])?;

        for question in catalog.questions() {
            let answer = answers.answer_for(&question.id).unwrap_or("");
            writer.write_record([question.id.as_str(), answer])?;
        }

        writer.flush()?;
    }

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub fn write_answers_csv<P: AsRef<Path>>(
    directory: P,
    catalog: &QuestionCatalog,
    answers: &AnswerSheet,
) -> Result<PathBuf, ExportError> {
    let directory = directory.as_ref();
    std::fs::create_dir_all(directory)?;

    let path = directory.join(ANSWERS_FILE_NAME);
    std::fs::write(&path, answers_csv(catalog, answers)?)?;
    Ok(path)
}
