use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Boundary check for raw bytes handed to the pipeline.
///
/// Text must be UTF-8; anything else is rejected before tokenization.
pub fn decode_text(bytes: &[u8]) -> Result<&str, AnalysisError> {
    std::str::from_utf8(bytes).map_err(|e| AnalysisError::InvalidInput(e.to_string()))
}
