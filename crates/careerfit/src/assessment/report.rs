//! Presentation-friendly summary of a scored assessment.

use super::catalog::QuestionCatalog;
use super::domain::AnswerSheet;
use super::scoring::{DimensionScore, ScoreResult};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RankedFunctionView {
    pub rank: usize,
    pub function: String,
    pub score: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub answered: usize,
    pub total_questions: usize,
    pub top_functions: Vec<RankedFunctionView>,
    pub recommended_level: String,
    pub seniority_index: f32,
    pub narrative: String,
    pub function_scores: Vec<DimensionScore>,
    pub trait_scores: Vec<DimensionScore>,
    pub level_scores: Vec<DimensionScore>,
}

impl AssessmentSummary {
    /// Snapshot of `result` enriched with answer coverage. Answers for ids
    /// the catalog does not carry are left out of the `answered` count, the
    /// same way scoring ignores them.
    pub fn build(catalog: &QuestionCatalog, answers: &AnswerSheet, result: &ScoreResult) -> Self {
        let answered = catalog
            .questions()
            .iter()
            .filter(|question| answers.answer_for(&question.id).is_some())
            .count();

        let top_functions = result
            .top_functions
            .iter()
            .enumerate()
            .map(|(index, entry)| RankedFunctionView {
                rank: index + 1,
                function: entry.dimension.clone(),
                score: entry.score,
            })
            .collect();

        Self {
            answered,
            total_questions: catalog.len(),
            top_functions,
            recommended_level: result.level.clone(),
            seniority_index: result.seniority_index,
            narrative: result.narrative.clone(),
            function_scores: result.function_scores.clone(),
            trait_scores: result.trait_scores.clone(),
            level_scores: result.level_scores.clone(),
        }
    }
}
