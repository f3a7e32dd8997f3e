use careerfit::assessment::{
    AnswerSheetImporter, InstrumentProfile, QuestionCatalog, ScoringEngine,
};

fn standard_engine() -> ScoringEngine {
    ScoringEngine::new(InstrumentProfile::standard())
}

#[test]
fn imported_sheet_keeps_answered_rows_only() {
    let csv = "QuestionID,Answer\nQ01,Agree\nQ02,\nQ41,Strongly Agree\nQX,Agree\n";

    let sheet = AnswerSheetImporter::from_reader(csv.as_bytes()).expect("import succeeds");

    assert_eq!(sheet.len(), 3);
    assert_eq!(sheet.answer_for("Q01"), Some("Agree"));
    assert_eq!(sheet.answer_for("Q02"), None);
    assert_eq!(sheet.answer_for("QX"), Some("Agree"));
}

#[test]
fn header_only_file_yields_an_empty_sheet() {
    let sheet =
        AnswerSheetImporter::from_reader("QuestionID,Answer\n".as_bytes()).expect("import succeeds");

    assert!(sheet.is_empty());
}

#[test]
fn unknown_labels_from_disk_count_as_neutral() {
    let engine = standard_engine();
    let catalog = QuestionCatalog::standard();

    let lenient = AnswerSheetImporter::from_reader("QuestionID,Answer\nQ01,Sometimes\n".as_bytes())
        .expect("import succeeds");
    let neutral = AnswerSheetImporter::from_reader("QuestionID,Answer\nQ01,Neutral\n".as_bytes())
        .expect("import succeeds");

    assert_eq!(
        engine.score(&catalog, &lenient),
        engine.score(&catalog, &neutral)
    );
}

#[test]
fn sample_answer_sheet_profiles_an_hr_systems_analyst() {
    let sheet = AnswerSheetImporter::from_reader(include_str!("../sample_answers.csv").as_bytes())
        .expect("sample answers import");

    assert_eq!(sheet.len(), 58);
    assert_eq!(sheet.answer_for("Q13"), None);
    assert_eq!(sheet.answer_for("Q53"), None);

    let engine = standard_engine();
    let catalog = QuestionCatalog::standard();
    let result = engine.score(&catalog, &sheet);

    let ranked: Vec<&str> = result
        .top_functions
        .iter()
        .map(|entry| entry.dimension.as_str())
        .collect();
    assert!(ranked.contains(&"HR Analytics"), "{ranked:?}");
    assert!(ranked.contains(&"HRIS / HR Technology"), "{ranked:?}");
    assert_eq!(result.level, "Senior / Lead Specialist");
}
