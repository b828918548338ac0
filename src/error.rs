//! Error types for NeoMind

use crate::intake::ValidationError;
use thiserror::Error;

/// Errors that can occur during a screening run
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Intake validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}
