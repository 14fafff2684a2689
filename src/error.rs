use std::path::PathBuf;

/// Errors from the Monte-Carlo agent.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("no columns available to choose")]
    NoMovesAvailable,
}

/// Errors that can occur when loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write settings file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("settings validation error: {0}")]
    Validation(String),
}

/// Errors that can occur when loading or saving statistics.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
