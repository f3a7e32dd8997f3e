use crate::score::{export_results, render_summary};
use careerfit::assessment::{
    AnswerSheet, AssessmentSummary, InstrumentProfile, QuestionCatalog, ScoringEngine,
};
use careerfit::config::AppConfig;
use careerfit::error::AppError;
use careerfit::telemetry;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Write the results JSON and answers CSV after scoring
    #[arg(long)]
    pub(crate) export: bool,
    /// Write the export files into DIR instead of the configured directory
    #[arg(long, value_name = "DIR")]
    pub(crate) export_dir: Option<PathBuf>,
}

pub(crate) fn run_demo(mut args: DemoArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    let export_requested = args.export || args.export_dir.is_some();
    if let Some(directory) = args.export_dir.take() {
        config.export.directory = directory;
    }
    telemetry::init(&config.telemetry)?;

    let catalog = QuestionCatalog::standard();
    let engine = ScoringEngine::new(InstrumentProfile::standard());
    let answers = sample_answers();
    let result = engine.score(&catalog, &answers);
    let summary = AssessmentSummary::build(&catalog, &answers, &result);

    info!(
        environment = ?config.environment,
        answered = summary.answered,
        level = %summary.recommended_level,
        "demo assessment scored"
    );

    println!("Career fit demo: sample respondent with an HR systems lean");
    println!();
    render_summary(&summary);

    if export_requested {
        export_results(&config.export.directory, &catalog, &answers, &result)?;
    }

    Ok(())
}

/// Sample respondent who gravitates toward analytics and HR technology.
/// Two statements are left unanswered to show partial-sheet handling.
fn sample_answers() -> AnswerSheet {
    let entries = [
        ("Q01", "Agree"),
        ("Q02", "Neutral"),
        ("Q03", "Neutral"),
        ("Q04", "Agree"),
        ("Q05", "Agree"),
        ("Q06", "Disagree"),
        ("Q07", "Neutral"),
        ("Q08", "Disagree"),
        ("Q09", "Strongly Agree"),
        ("Q10", "Disagree"),
        ("Q11", "Agree"),
        ("Q12", "Agree"),
        ("Q14", "Agree"),
        ("Q15", "Neutral"),
        ("Q16", "Strongly Agree"),
        ("Q17", "Strongly Agree"),
        ("Q18", "Agree"),
        ("Q19", "Strongly Agree"),
        ("Q20", "Strongly Agree"),
        ("Q21", "Neutral"),
        ("Q22", "Disagree"),
        ("Q23", "Neutral"),
        ("Q24", "Agree"),
        ("Q25", "Neutral"),
        ("Q26", "Neutral"),
        ("Q27", "Neutral"),
        ("Q28", "Agree"),
        ("Q29", "Neutral"),
        ("Q30", "Agree"),
        ("Q31", "Neutral"),
        ("Q32", "Agree"),
        ("Q33", "Strongly Agree"),
        ("Q34", "Agree"),
        ("Q35", "Agree"),
        ("Q36", "Neutral"),
        ("Q37", "Agree"),
        ("Q38", "Agree"),
        ("Q39", "Neutral"),
        ("Q40", "Neutral"),
        ("Q41", "Strongly Agree"),
        ("Q42", "Strongly Agree"),
        ("Q43", "Strongly Agree"),
        ("Q44", "Strongly Agree"),
        ("Q45", "Agree"),
        ("Q46", "Neutral"),
        ("Q47", "Neutral"),
        ("Q48", "Agree"),
        ("Q49", "Agree"),
        ("Q50", "Agree"),
        ("Q51", "Agree"),
        ("Q52", "Agree"),
        ("Q54", "Strongly Agree"),
        ("Q55", "Strongly Agree"),
        ("Q56", "Agree"),
        ("Q57", "Agree"),
        ("Q58", "Neutral"),
        ("Q59", "Agree"),
        ("Q60", "Neutral"),
    ];

    let mut sheet = AnswerSheet::new();
    for (question_id, label) in entries {
        sheet.record(question_id.to_string(), label.to_string());
    }
    sheet
}

#[cfg(test)]
mod tests {
    use super::sample_answers;
    use careerfit::assessment::{InstrumentProfile, LikertChoice, QuestionCatalog, ScoringEngine};

    #[test]
    fn sample_answers_stay_on_the_standard_catalog_and_scale() {
        let catalog = QuestionCatalog::standard();
        let answers = sample_answers();

        assert_eq!(answers.len(), 58);
        for (question_id, label) in answers.iter() {
            assert!(
                catalog.question(question_id).is_some(),
                "unknown question {question_id}"
            );
            assert!(
                LikertChoice::from_label(label).is_some(),
                "unrecognized answer {label}"
            );
        }
    }

    #[test]
    fn sample_profile_recommends_a_senior_analytics_career() {
        let catalog = QuestionCatalog::standard();
        let engine = ScoringEngine::new(InstrumentProfile::standard());

        let result = engine.score(&catalog, &sample_answers());

        let ranked: Vec<&str> = result
            .top_functions
            .iter()
            .map(|entry| entry.dimension.as_str())
            .collect();
        assert!(ranked.contains(&"HR Analytics"), "ranked: {ranked:?}");
        assert!(
            ranked.contains(&"HRIS / HR Technology"),
            "ranked: {ranked:?}"
        );
        assert_eq!(result.level, "Senior / Lead Specialist");
    }
}
