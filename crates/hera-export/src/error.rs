//! Error types for the export boundary

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("assignment is missing variables: {}", .0.join(", "))]
    AssignmentMissing(Vec<String>),

    #[error("assignment contains unknown variables: {}", .0.join(", "))]
    AssignmentExtraneous(Vec<String>),

    #[error("assignment value of {name} must be 0 or 1, got {value}")]
    AssignmentValue { name: String, value: u8 },

    #[error("model error: {0}")]
    Model(#[from] hera_core::Error),

    #[error("evaluator error: {program} - {message}")]
    Evaluator { program: String, message: String },

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn evaluator(program: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Evaluator {
            program: program.into(),
            message: message.into(),
        }
    }
}
