use super::DimensionScore;

/// One-paragraph markdown summary of a scored assessment.
///
/// The working-styles sentence only appears when two top traits are
/// available; an instrument with fewer traits drops it rather than padding
/// the sentence with blanks.
pub(crate) fn compose(
    top_functions: &[DimensionScore],
    top_traits: &[DimensionScore],
    level: &str,
    fallback_function: &str,
) -> String {
    let (primary, primary_score) = top_functions
        .first()
        .map(|entry| (entry.dimension.as_str(), entry.score))
        .unwrap_or((fallback_function, 0.0));

    let mut narrative = format!(
        "Your answers show strongest alignment with **{}** (fit score: {:.0}%). ",
        primary, primary_score
    );

    if let [first, second] = top_traits {
        narrative.push_str(&format!(
            "Your strongest working styles are **{}** and **{}**. ",
            first.dimension, second.dimension
        ));
    }

    narrative.push_str(&format!(
        "Overall, your recommended career level is **{}**.",
        level
    ));

    narrative
}
