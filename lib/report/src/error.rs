use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dump file, line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("No rank for candidate '{candidate}' under query '{query}'")]
    MissingEntry { query: String, candidate: String },
}
