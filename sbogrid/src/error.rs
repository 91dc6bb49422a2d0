use thiserror::Error;

/// Interaction outcomes that degrade instead of failing.
///
/// These never reach the caller: a missing target becomes a silent no-op,
/// an invalid selection becomes a warning advisory, and an unrecognized
/// column type renders as a text input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("target element not found: {0}")]
    MissingTarget(String),
    #[error("no row selected in table {0}")]
    InvalidSelection(String),
    #[error("unrecognized type for column {0}, rendering as text input")]
    UnrecognizedColumnType(String),
}

/// Errors loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors persisting editor layouts.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
