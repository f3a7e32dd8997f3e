use std::collections::BTreeMap;

use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::{AnswerSheet, Question};
use crate::assessment::scoring::{InstrumentProfile, LevelBand, ScoringEngine, SeniorityDimension};

pub(super) fn question(
    id: &str,
    functions: &[(&str, f32)],
    traits: &[(&str, f32)],
    levels: &[(&str, f32)],
) -> Question {
    Question {
        id: id.to_string(),
        text: format!("Statement {id}"),
        function_weights: weights(functions),
        trait_weights: weights(traits),
        level_weights: weights(levels),
    }
}

pub(super) fn weights(entries: &[(&str, f32)]) -> BTreeMap<String, f32> {
    entries
        .iter()
        .map(|(name, weight)| (name.to_string(), *weight))
        .collect()
}

pub(super) fn catalog(questions: Vec<Question>) -> QuestionCatalog {
    QuestionCatalog::from_questions(questions).expect("unique question ids")
}

pub(super) fn answers(entries: &[(&str, &str)]) -> AnswerSheet {
    let mut sheet = AnswerSheet::new();
    for (id, label) in entries {
        sheet.record(id.to_string(), label.to_string());
    }
    sheet
}

pub(super) fn standard_bands() -> Vec<LevelBand> {
    InstrumentProfile::standard().level_bands
}

pub(super) fn standard_level_dimensions() -> Vec<SeniorityDimension> {
    InstrumentProfile::standard().level_dimensions
}

/// Two functions, two traits, and the standard level rules. Small enough
/// that expected scores stay easy to compute by hand.
pub(super) fn mini_instrument() -> InstrumentProfile {
    InstrumentProfile {
        functions: vec![
            "Talent Acquisition".to_string(),
            "HR Analytics".to_string(),
        ],
        traits: vec!["People-centric".to_string(), "Analytical".to_string()],
        level_dimensions: standard_level_dimensions(),
        level_bands: standard_bands(),
        fallback_function: "General HR".to_string(),
    }
}

pub(super) fn mini_engine() -> ScoringEngine {
    ScoringEngine::new(mini_instrument())
}

pub(super) fn standard_engine() -> ScoringEngine {
    ScoringEngine::new(InstrumentProfile::standard())
}
