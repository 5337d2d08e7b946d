use std::fs;
use std::path::Path;

use placement_ai::config::AppConfig;
use placement_ai::diagnostics::definitions::{
    definition_key, get_definition, DiagnosticDefinition,
};
use placement_ai::diagnostics::domain::{ChaptersSelection, DiagnosticData};
use placement_ai::error::AppError;

/// Definition lookup order: explicit flag, configured default, then the
/// submission's own track and level.
pub(crate) fn resolve_definition(
    explicit: Option<&str>,
    config: &AppConfig,
    data: &DiagnosticData,
) -> Result<&'static DiagnosticDefinition, AppError> {
    let key = match explicit {
        Some(key) => key.to_string(),
        None => match &config.scoring.default_definition {
            Some(key) => key.clone(),
            None => definition_key(data.school.track, data.school.level),
        },
    };
    let definition = get_definition(&key)?;
    Ok(definition)
}

pub(crate) fn read_diagnostic(path: &Path) -> Result<DiagnosticData, AppError> {
    let raw = fs::read_to_string(path)?;
    let data = serde_json::from_str(&raw)?;
    Ok(data)
}

pub(crate) fn read_selection(path: &Path) -> Result<ChaptersSelection, AppError> {
    let raw = fs::read_to_string(path)?;
    let selection = serde_json::from_str(&raw)?;
    Ok(selection)
}
