//! Career-fit assessment: question catalog, answer intake, scoring, and
//! result export.
//!
//! The engine itself is pure. [`ScoringEngine::score`] reads a catalog and
//! an answer sheet and returns a [`ScoreResult`]; intake and export handle
//! the file formats around it.

pub mod catalog;
pub mod domain;
pub mod export;
pub mod intake;
pub mod report;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, QuestionCatalog};
pub use domain::{AnswerSheet, LikertChoice, Question};
pub use export::{
    answers_csv, write_answers_csv, ExportError, ResultsExport, ANSWERS_FILE_NAME,
    RESULTS_FILE_NAME,
};
pub use intake::{AnswerImportError, AnswerSheetImporter};
pub use report::{AssessmentSummary, RankedFunctionView};
pub use scoring::{
    DimensionScore, InstrumentProfile, LevelBand, ScoreResult, ScoringEngine, SeniorityDimension,
};
