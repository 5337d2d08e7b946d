use std::path::PathBuf;

use clap::Args;
use placement_ai::config::AppConfig;
use placement_ai::diagnostics::scoring::compute_scoring_v2;
use placement_ai::error::AppError;
use placement_ai::telemetry;
use tracing::info;

use crate::demo::render_result;
use crate::infra::{read_diagnostic, read_selection, resolve_definition};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a diagnostic submission JSON export
    pub(crate) input: PathBuf,
    /// Definition key or alias, overriding the submission's track and level
    #[arg(long)]
    pub(crate) definition: Option<String>,
    /// Optional JSON file with the chapter selection the student reported
    #[arg(long)]
    pub(crate) chapters: Option<PathBuf>,
    /// Emit the raw scoring result as JSON instead of the readable report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        input,
        definition,
        chapters,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let data = read_diagnostic(&input)?;
    let definition = resolve_definition(definition.as_deref(), &config, &data)?;

    let mut options = definition.scoring_options();
    if let Some(path) = chapters {
        options.chapters_selection = Some(read_selection(&path)?);
    }

    let result = compute_scoring_v2(&data, &options);
    info!(
        definition = definition.key,
        readiness = result.readiness_score,
        risk = result.risk_index,
        "scored diagnostic submission"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    render_result(&data, definition, &result);
    Ok(())
}
