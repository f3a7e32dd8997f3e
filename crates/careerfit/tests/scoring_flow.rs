use careerfit::assessment::{
    AnswerSheet, InstrumentProfile, LikertChoice, QuestionCatalog, ScoringEngine,
};

fn uniform_answers(catalog: &QuestionCatalog, label: &str) -> AnswerSheet {
    let mut sheet = AnswerSheet::new();
    for question in catalog.questions() {
        sheet.record(question.id.clone(), label.to_string());
    }
    sheet
}

fn standard_engine() -> ScoringEngine {
    ScoringEngine::new(InstrumentProfile::standard())
}

#[test]
fn standard_instrument_matches_catalog_shape() {
    let instrument = InstrumentProfile::standard();

    assert_eq!(instrument.functions.len(), 10);
    assert_eq!(instrument.traits.len(), 6);
    assert_eq!(instrument.level_dimensions.len(), 4);
    assert_eq!(instrument.level_bands.len(), 4);

    let weight_total: f32 = instrument
        .level_dimensions
        .iter()
        .map(|dimension| dimension.weight)
        .sum();
    assert!((weight_total - 1.0).abs() < 1e-6);
}

#[test]
fn agreeing_with_everything_recommends_lead_manager() {
    let engine = standard_engine();
    let catalog = QuestionCatalog::standard();
    let sheet = uniform_answers(&catalog, LikertChoice::Agree.label());

    let result = engine.score(&catalog, &sheet);

    for entry in result.function_scores.iter().chain(&result.trait_scores) {
        assert_eq!(entry.score, 80.0, "{}", entry.dimension);
    }
    assert_eq!(result.seniority_index, 80.0);
    assert_eq!(result.level, "Lead / Manager");
}

#[test]
fn strongly_agreeing_with_everything_maxes_every_dimension() {
    let engine = standard_engine();
    let catalog = QuestionCatalog::standard();
    let sheet = uniform_answers(&catalog, LikertChoice::StronglyAgree.label());

    let result = engine.score(&catalog, &sheet);

    for entry in result
        .function_scores
        .iter()
        .chain(&result.trait_scores)
        .chain(&result.level_scores)
    {
        assert_eq!(entry.score, 100.0, "{}", entry.dimension);
    }
    assert!((result.seniority_index - 100.0).abs() < 1e-4);
    assert_eq!(result.level, "Lead / Manager");
    assert_eq!(result.top_functions.len(), 3);
}

#[test]
fn neutral_throughout_sits_on_the_senior_boundary() {
    let engine = standard_engine();
    let catalog = QuestionCatalog::standard();
    let sheet = uniform_answers(&catalog, LikertChoice::Neutral.label());

    let result = engine.score(&catalog, &sheet);

    for entry in &result.function_scores {
        assert!((entry.score - 60.0).abs() < 1e-3, "{}", entry.dimension);
    }
    assert_eq!(result.level, "Senior / Lead Specialist");
}

#[test]
fn disagreeing_with_everything_recommends_junior_entry() {
    let engine = standard_engine();
    let catalog = QuestionCatalog::standard();
    let sheet = uniform_answers(&catalog, LikertChoice::Disagree.label());

    let result = engine.score(&catalog, &sheet);

    assert_eq!(result.seniority_index, 40.0);
    assert_eq!(result.level, "Junior / Entry");
}

#[test]
fn empty_sheet_produces_the_zero_profile() {
    let engine = standard_engine();
    let catalog = QuestionCatalog::standard();

    let result = engine.score(&catalog, &AnswerSheet::new());

    for entry in result
        .function_scores
        .iter()
        .chain(&result.trait_scores)
        .chain(&result.level_scores)
    {
        assert_eq!(entry.score, 0.0, "{}", entry.dimension);
    }
    assert_eq!(result.seniority_index, 0.0);
    assert_eq!(result.level, "Junior / Entry");
    assert_eq!(
        result.narrative,
        "Your answers show strongest alignment with **Talent Acquisition** (fit score: 0%). \
         Your strongest working styles are **People-centric** and **Analytical**. \
         Overall, your recommended career level is **Junior / Entry**."
    );
}

#[test]
fn top_functions_are_the_three_highest_scores() {
    let engine = standard_engine();
    let catalog = QuestionCatalog::standard();
    let mut sheet = uniform_answers(&catalog, LikertChoice::Disagree.label());
    // Lean the profile toward analytics questions.
    for id in ["Q41", "Q42", "Q43", "Q44", "Q45"] {
        sheet.record(id.to_string(), LikertChoice::StronglyAgree.label().to_string());
    }

    let result = engine.score(&catalog, &sheet);

    assert_eq!(result.top_functions[0].dimension, "HR Analytics");
    assert_eq!(result.top_functions.len(), 3);

    let lowest_ranked = result.top_functions[2].score;
    let ranked: Vec<&str> = result
        .top_functions
        .iter()
        .map(|entry| entry.dimension.as_str())
        .collect();
    for entry in &result.function_scores {
        if !ranked.contains(&entry.dimension.as_str()) {
            assert!(entry.score <= lowest_ranked, "{}", entry.dimension);
        }
    }
}
