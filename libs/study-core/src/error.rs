//! Error types for study-core.

use thiserror::Error;

/// Result type alias using ValidationError.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised while validating generation requests and artifact payloads.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("question count must be between {min} and {max}, got {got}")]
    CountOutOfRange { min: u32, max: u32, got: u32 },

    #[error("at least one question type is required")]
    NoQuestionTypes,

    #[error("question text must not be empty")]
    EmptyQuestionText,

    #[error("content must not be empty")]
    EmptyContent,
}
