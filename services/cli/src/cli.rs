use crate::demo::{run_demo, DemoArgs};
use crate::score::{run_score, ScoreArgs};
use clap::{Parser, Subcommand};
use placement_ai::diagnostics::definitions::{get_definition, list_definition_keys};
use placement_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Placement Diagnostics",
    about = "Score diagnostic submissions and inspect scoring definitions from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a diagnostic submission exported as JSON
    Score(ScoreArgs),
    /// List the registered scoring definitions
    Definitions,
    /// Score a built-in sample submission (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Score(args) => run_score(args),
        Command::Definitions => run_definitions(),
        Command::Demo(args) => run_demo(args),
    }
}

fn run_definitions() -> Result<(), AppError> {
    println!("Registered scoring definitions");
    for key in list_definition_keys() {
        let definition = get_definition(key)?;
        println!(
            "- {} | {} | {} domains, {} skills, {} chapters (v{})",
            definition.key,
            definition.label,
            definition.skills.len(),
            definition.skill_count(),
            definition.chapters.len(),
            definition.version
        );
    }
    Ok(())
}
