use super::common::*;
use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::AnswerSheet;

#[test]
fn engine_normalizes_raw_points_against_the_ceiling() {
    let engine = mini_engine();
    let catalog = catalog(vec![question(
        "Q1",
        &[("Talent Acquisition", 2.0)],
        &[("People-centric", 1.0)],
        &[("Execution", 1.0)],
    )]);

    let result = engine.score(&catalog, &answers(&[("Q1", "Agree")]));

    // Agree is worth 4 of 5 points, so every touched dimension lands at 80.
    assert_eq!(result.function_scores[0].dimension, "Talent Acquisition");
    assert_eq!(result.function_scores[0].score, 80.0);
    assert_eq!(result.function_scores[1].dimension, "HR Analytics");
    assert_eq!(result.function_scores[1].score, 0.0);
    assert_eq!(result.trait_scores[0].score, 80.0);
    assert_eq!(result.level_scores[0].score, 80.0);
}

#[test]
fn unanswered_questions_still_raise_the_ceiling() {
    let engine = mini_engine();
    let catalog = catalog(vec![
        question(
            "Q1",
            &[("Talent Acquisition", 1.0)],
            &[("Analytical", 1.0)],
            &[("Ownership", 1.0)],
        ),
        question(
            "Q2",
            &[("Talent Acquisition", 1.0)],
            &[("Analytical", 1.0)],
            &[("Ownership", 1.0)],
        ),
    ]);

    let result = engine.score(&catalog, &answers(&[("Q1", "Strongly Agree")]));

    // 5 of 10 possible points: the skipped question halves the score.
    assert_eq!(result.function_scores[0].score, 50.0);
}

#[test]
fn unknown_labels_count_as_neutral() {
    let engine = mini_engine();
    let catalog = catalog(vec![question(
        "Q1",
        &[("Talent Acquisition", 1.0)],
        &[],
        &[],
    )]);

    let lenient = engine.score(&catalog, &answers(&[("Q1", "Maybe")]));
    let neutral = engine.score(&catalog, &answers(&[("Q1", "Neutral")]));

    assert_eq!(lenient, neutral);
}

#[test]
fn answers_for_unknown_question_ids_are_ignored() {
    let engine = mini_engine();
    let catalog = catalog(vec![question(
        "Q1",
        &[("Talent Acquisition", 1.0)],
        &[],
        &[],
    )]);

    let with_stray = engine.score(
        &catalog,
        &answers(&[("Q1", "Agree"), ("QX", "Strongly Agree")]),
    );
    let without = engine.score(&catalog, &answers(&[("Q1", "Agree")]));

    assert_eq!(with_stray, without);
}

#[test]
fn weights_for_undeclared_dimensions_are_dropped() {
    let engine = mini_engine();
    let catalog = catalog(vec![question(
        "Q1",
        &[("Talent Acquisition", 2.0), ("Quantum HR", 3.0)],
        &[],
        &[],
    )]);

    let result = engine.score(&catalog, &answers(&[("Q1", "Strongly Agree")]));

    assert_eq!(result.function_scores.len(), 2);
    assert!(result
        .function_scores
        .iter()
        .all(|entry| entry.dimension != "Quantum HR"));
    assert_eq!(result.function_scores[0].score, 100.0);
}

#[test]
fn dimensions_without_any_weight_score_zero() {
    let engine = mini_engine();
    let catalog = catalog(vec![question(
        "Q1",
        &[("Talent Acquisition", 1.0)],
        &[],
        &[],
    )]);

    let result = engine.score(&catalog, &answers(&[("Q1", "Strongly Agree")]));

    assert_eq!(result.function_scores[1].dimension, "HR Analytics");
    assert_eq!(result.function_scores[1].score, 0.0);
}

#[test]
fn tied_functions_keep_instrument_order_in_the_ranking() {
    let engine = standard_engine();
    let catalog = catalog(vec![question(
        "Q1",
        &[
            ("Talent Acquisition", 1.0),
            ("HR Operations", 1.0),
            ("HR Analytics", 1.0),
            ("Talent Management", 1.0),
        ],
        &[],
        &[],
    )]);

    let result = engine.score(&catalog, &answers(&[("Q1", "Agree")]));

    let ranked: Vec<&str> = result
        .top_functions
        .iter()
        .map(|entry| entry.dimension.as_str())
        .collect();
    assert_eq!(
        ranked,
        ["Talent Acquisition", "HR Operations", "HR Analytics"]
    );
}

#[test]
fn empty_answer_sheet_scores_zero_everywhere() {
    let engine = mini_engine();
    let catalog = catalog(vec![question(
        "Q1",
        &[("Talent Acquisition", 1.0), ("HR Analytics", 1.0)],
        &[("People-centric", 1.0)],
        &[("Execution", 1.0)],
    )]);

    let result = engine.score(&catalog, &AnswerSheet::new());

    assert!(result
        .function_scores
        .iter()
        .chain(&result.trait_scores)
        .chain(&result.level_scores)
        .all(|entry| entry.score == 0.0));
    assert_eq!(result.seniority_index, 0.0);
    assert_eq!(result.level, "Junior / Entry");
    assert_eq!(result.top_functions[0].dimension, "Talent Acquisition");
}

#[test]
fn score_vectors_follow_instrument_dimension_order() {
    let engine = standard_engine();
    let catalog = QuestionCatalog::standard();

    let result = engine.score(&catalog, &answers(&[("Q01", "Agree")]));

    let functions: Vec<&str> = result
        .function_scores
        .iter()
        .map(|entry| entry.dimension.as_str())
        .collect();
    assert_eq!(functions, engine.instrument().functions);

    let traits: Vec<&str> = result
        .trait_scores
        .iter()
        .map(|entry| entry.dimension.as_str())
        .collect();
    assert_eq!(traits, engine.instrument().traits);
}

#[test]
fn scoring_is_pure_across_repeated_calls() {
    let engine = standard_engine();
    let catalog = QuestionCatalog::standard();
    let sheet = answers(&[
        ("Q01", "Agree"),
        ("Q41", "Strongly Agree"),
        ("Q58", "Disagree"),
    ]);

    let first = engine.score(&catalog, &sheet);
    let second = engine.score(&catalog, &sheet);

    assert_eq!(first, second);
}
