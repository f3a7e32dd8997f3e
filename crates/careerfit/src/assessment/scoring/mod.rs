//! Scoring engine turning recorded answers into a career-fit profile.
//!
//! Scoring runs two passes over the catalog. Every question contributes its
//! weights to a best-case ceiling per dimension, answered or not, so skipped
//! questions still count against the respondent. Answered questions then
//! contribute their Likert value times the same weights, and each dimension
//! reports raw-over-ceiling as a 0-100 score.

mod config;

pub(crate) mod level;
pub(crate) mod narrative;
pub(crate) mod tally;

pub use config::{InstrumentProfile, LevelBand, SeniorityDimension};

use super::catalog::QuestionCatalog;
use super::domain::{AnswerSheet, LikertChoice};
use serde::{Deserialize, Serialize};
use tally::DimensionTally;

const TOP_FUNCTION_COUNT: usize = 3;
const TOP_TRAIT_COUNT: usize = 2;

/// A dimension name with its normalized 0-100 score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: String,
    pub score: f32,
}

/// Full outcome of scoring one answer sheet.
///
/// Score vectors follow the instrument's dimension order; `top_functions`
/// is the descending top three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub function_scores: Vec<DimensionScore>,
    pub trait_scores: Vec<DimensionScore>,
    pub level_scores: Vec<DimensionScore>,
    pub top_functions: Vec<DimensionScore>,
    pub seniority_index: f32,
    pub level: String,
    pub narrative: String,
}

/// Scoring engine applying the configured instrument to an answer sheet.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    instrument: InstrumentProfile,
}

impl ScoringEngine {
    pub fn new(instrument: InstrumentProfile) -> Self {
        Self { instrument }
    }

    pub fn instrument(&self) -> &InstrumentProfile {
        &self.instrument
    }

    /// Scores `answers` against `catalog`.
    ///
    /// Unanswered questions are skipped, answers whose label is not a known
    /// Likert choice count as [`LikertChoice::Neutral`], and answers for
    /// question ids the catalog does not carry are ignored entirely.
    pub fn score(&self, catalog: &QuestionCatalog, answers: &AnswerSheet) -> ScoreResult {
        let mut functions = DimensionTally::new(self.instrument.functions.iter().cloned());
        let mut traits = DimensionTally::new(self.instrument.traits.iter().cloned());
        let mut levels = DimensionTally::new(
            self.instrument
                .level_dimensions
                .iter()
                .map(|dimension| dimension.name.clone()),
        );

        for question in catalog.questions() {
            functions.add_ceiling(&question.function_weights);
            traits.add_ceiling(&question.trait_weights);
            levels.add_ceiling(&question.level_weights);

            let label = match answers.answer_for(&question.id) {
                Some(label) => label,
                None => continue,
            };

            let value = LikertChoice::from_label(label)
                .unwrap_or(LikertChoice::Neutral)
                .value();

            functions.add_response(value, &question.function_weights);
            traits.add_response(value, &question.trait_weights);
            levels.add_response(value, &question.level_weights);
        }

        let function_scores = functions.normalized();
        let trait_scores = traits.normalized();
        let level_scores = levels.normalized();

        let top_functions = tally::rank_descending(&function_scores, TOP_FUNCTION_COUNT);
        let top_traits = tally::rank_descending(&trait_scores, TOP_TRAIT_COUNT);

        let seniority_index =
            level::seniority_index(&level_scores, &self.instrument.level_dimensions);
        let level = level::classify(seniority_index, &self.instrument.level_bands);

        let narrative = narrative::compose(
            &top_functions,
            &top_traits,
            &level,
            &self.instrument.fallback_function,
        );

        ScoreResult {
            function_scores,
            trait_scores,
            level_scores,
            top_functions,
            seniority_index,
            level,
            narrative,
        }
    }
}
