use careerfit::assessment::{
    write_answers_csv, AnswerSheet, AnswerSheetImporter, AssessmentSummary, ExportError,
    InstrumentProfile, QuestionCatalog, ResultsExport, ScoreResult, ScoringEngine,
};
use careerfit::config::AppConfig;
use careerfit::error::AppError;
use careerfit::telemetry;
use chrono::Utc;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answers CSV with QuestionID and Answer columns
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the summary as pretty JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
    /// Write the results JSON and answers CSV after scoring
    #[arg(long)]
    pub(crate) export: bool,
    /// Write the export files into DIR instead of the configured directory
    #[arg(long, value_name = "DIR")]
    pub(crate) export_dir: Option<PathBuf>,
}

pub(crate) fn run_score(mut args: ScoreArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    let export_requested = args.export || args.export_dir.is_some();
    if let Some(directory) = args.export_dir.take() {
        config.export.directory = directory;
    }
    telemetry::init(&config.telemetry)?;

    let catalog = QuestionCatalog::standard();
    let engine = ScoringEngine::new(InstrumentProfile::standard());
    let answers = AnswerSheetImporter::from_path(&args.answers)?;
    let result = engine.score(&catalog, &answers);
    let summary = AssessmentSummary::build(&catalog, &answers, &result);

    info!(
        environment = ?config.environment,
        answers = %args.answers.display(),
        answered = summary.answered,
        total = summary.total_questions,
        level = %summary.recommended_level,
        "assessment scored"
    );

    if args.json {
        let payload = serde_json::to_string_pretty(&summary).map_err(ExportError::from)?;
        println!("{payload}");
    } else {
        render_summary(&summary);
    }

    if export_requested {
        export_results(&config.export.directory, &catalog, &answers, &result)?;
    }

    Ok(())
}

pub(crate) fn render_summary(summary: &AssessmentSummary) {
    println!(
        "Answered {} of {} questions",
        summary.answered, summary.total_questions
    );

    println!("\nTop matching HR functions");
    for entry in &summary.top_functions {
        println!(
            "{}. {} (fit score: {:.1}%)",
            entry.rank, entry.function, entry.score
        );
    }

    println!(
        "\nRecommended career level: {} (seniority index {:.1})",
        summary.recommended_level, summary.seniority_index
    );
    println!("\n{}", summary.narrative);

    println!("\nFunction fit scores");
    for score in &summary.function_scores {
        println!("- {}: {:.1}%", score.dimension, score.score);
    }

    println!("\nWorking style scores");
    for score in &summary.trait_scores {
        println!("- {}: {:.1}%", score.dimension, score.score);
    }

    println!("\nSeniority dimension scores");
    for score in &summary.level_scores {
        println!("- {}: {:.1}%", score.dimension, score.score);
    }
}

pub(crate) fn export_results(
    directory: &Path,
    catalog: &QuestionCatalog,
    answers: &AnswerSheet,
    result: &ScoreResult,
) -> Result<(), AppError> {
    let export = ResultsExport::new(result, answers, Utc::now());
    let results_path = export.write_json(directory)?;
    let answers_path = write_answers_csv(directory, catalog, answers)?;

    info!(
        results = %results_path.display(),
        answers = %answers_path.display(),
        "export files written"
    );
    Ok(())
}
