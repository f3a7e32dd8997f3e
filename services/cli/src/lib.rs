mod cli;
mod demo;
mod questions;
mod score;

use careerfit::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
