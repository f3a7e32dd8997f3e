use careerfit::assessment::{LikertChoice, QuestionCatalog};
use careerfit::error::AppError;
use clap::Args;
use std::collections::BTreeMap;

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Show the dimension weights behind every statement
    #[arg(long)]
    pub(crate) weights: bool,
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard();
    let scale: Vec<&str> = LikertChoice::ordered()
        .into_iter()
        .map(LikertChoice::label)
        .collect();

    println!("Questionnaire with {} statements", catalog.len());
    println!("Answer scale: {}", scale.join(" / "));
    println!();

    for question in catalog.questions() {
        println!("{}. {}", question.id, question.text);
        if args.weights {
            render_weights("functions", &question.function_weights);
            render_weights("traits", &question.trait_weights);
            render_weights("levels", &question.level_weights);
        }
    }

    Ok(())
}

fn render_weights(family: &str, weights: &BTreeMap<String, f32>) {
    if weights.is_empty() {
        return;
    }

    let entries: Vec<String> = weights
        .iter()
        .map(|(dimension, weight)| format!("{dimension} {weight}"))
        .collect();
    println!("   {family}: {}", entries.join(", "));
}
