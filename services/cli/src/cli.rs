use crate::demo::{run_demo, DemoArgs};
use crate::questions::{run_questions, QuestionsArgs};
use crate::score::{run_score, ScoreArgs};
use careerfit::error::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "HR Career Fit Analyzer",
    about = "Score career-fit questionnaires into HR function, trait, and level profiles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a completed answers CSV and print the career-fit profile
    Score(ScoreArgs),
    /// Print the questionnaire statements and the answer scale
    Questions(QuestionsArgs),
    /// Score a built-in sample profile end to end (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Score(args) => run_score(args),
        Command::Questions(args) => run_questions(args),
        Command::Demo(args) => run_demo(args),
    }
}
