use std::env;
use std::fmt;

use crate::diagnostics::definitions::find_definition;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let default_definition = match env::var("APP_DEFAULT_DEFINITION") {
            Ok(key) => {
                if find_definition(&key).is_none() {
                    return Err(ConfigError::UnknownDefinition { key });
                }
                Some(key)
            }
            Err(_) => None,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            scoring: ScoringConfig { default_definition },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Scoring defaults applied when the caller picks no definition.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Definition key or alias used for submissions that do not name one.
    /// `None` falls back to the submission's own track and level.
    pub default_definition: Option<String>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    UnknownDefinition { key: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownDefinition { key } => {
                write!(
                    f,
                    "APP_DEFAULT_DEFINITION '{key}' does not match a registered diagnostic definition"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
