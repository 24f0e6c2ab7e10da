use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WordguardError {
    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("failed to read delimited text: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
