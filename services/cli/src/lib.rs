mod cli;
mod demo;
mod infra;
mod score;

use placement_ai::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
