use thiserror::Error;

/// Result type for lesiontrack operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Error types for lesiontrack operations
///
/// Extraction and rendering never fail on unrecognized input; these
/// variants cover typed parsing, configuration and the CLI boundary.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Finding number could not be parsed
    #[error("Invalid finding identifier: {0}")]
    InvalidFindingId(String),

    /// Exam date is neither YYYY-MM-DD nor the no-date sentinel
    #[error("Invalid exam date: {0}")]
    InvalidDate(String),

    /// Lymphoma background needs both reference findings
    #[error(
        "Lymphoma background requires findings 1 (mediastinal blood pool) and 2 (liver reference)."
    )]
    MissingReferenceFindings,

    /// Comparison threshold out of range
    #[error("Invalid comparison threshold: {0} (must be a positive finite number)")]
    InvalidThreshold(f64),

    /// Generic extraction error
    #[error("Extraction error: {0}")]
    ExtractionError(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Helper conversions
impl From<String> for ReportError {
    fn from(s: String) -> Self {
        ReportError::ExtractionError(s)
    }
}

impl From<&str> for ReportError {
    fn from(s: &str) -> Self {
        ReportError::ExtractionError(s.to_string())
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError::JsonError(format!("{}", e))
    }
}
