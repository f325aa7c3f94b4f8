use thiserror::Error;

/// Errors that can escape the import pipeline.
///
/// Malformed document content is never one of them: the parser degrades to
/// sentinel defaults instead. What remains are invalid calls and the
/// mechanical edges of a batch run.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to enumerate or read an input document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller handed us something that is not a usable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failed to serialize the workbook plan
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
