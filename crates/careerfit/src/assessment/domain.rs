use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Five-point agreement scale every question is answered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LikertChoice {
    StronglyDisagree,
    Disagree,
    Neutral,
    Agree,
    StronglyAgree,
}

impl LikertChoice {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::StronglyDisagree,
            Self::Disagree,
            Self::Neutral,
            Self::Agree,
            Self::StronglyAgree,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StronglyDisagree => "Strongly Disagree",
            Self::Disagree => "Disagree",
            Self::Neutral => "Neutral",
            Self::Agree => "Agree",
            Self::StronglyAgree => "Strongly Agree",
        }
    }

    /// Numeric response value, 1 (Strongly Disagree) through 5 (Strongly Agree).
    pub const fn value(self) -> u8 {
        match self {
            Self::StronglyDisagree => 1,
            Self::Disagree => 2,
            Self::Neutral => 3,
            Self::Agree => 4,
            Self::StronglyAgree => 5,
        }
    }

    /// Exact label lookup. Anything else is left to the caller, which lets the
    /// engine fall back to [`LikertChoice::Neutral`] for unrecognized answers.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|choice| choice.label() == label)
    }
}

/// One questionnaire statement and its contribution weights.
///
/// Weight maps key dimension names from the instrument profile; an absent
/// name means weight zero. Names outside the instrument's declared sets are
/// ignored during scoring rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub function_weights: BTreeMap<String, f32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub trait_weights: BTreeMap<String, f32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub level_weights: BTreeMap<String, f32>,
}

/// Collected answers keyed by question id, holding raw labels.
///
/// Labels stay unparsed so a sheet can carry answers the scale does not
/// recognize; the engine decides how to interpret them. A partially filled
/// sheet is legal, and an empty one scores to all zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet(BTreeMap<String, String>);

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any earlier answer to the same question.
    pub fn record(&mut self, question_id: String, label: String) {
        self.0.insert(question_id, label);
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(question_id, label)| (question_id.as_str(), label.as_str()))
    }
}
