//! Error types for hera models

use crate::types::VariableKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid {kind} name {name:?}: {reason}")]
    InvalidName {
        kind: VariableKind,
        name: String,
        reason: &'static str,
    },

    #[error("{name} is no {kind} of the model")]
    Unknown { kind: VariableKind, name: String },

    /// A mechanism argument that is not an action, background condition or
    /// consequence: the wrong kind of value, not a missing entry.
    #[error("{0} is not an action, background condition or consequence of the model")]
    NotAVariable(String),

    #[error("{name} is already a {kind} of the model")]
    Duplicate { kind: VariableKind, name: String },

    #[error("consequence {0} is not caused by any variable")]
    Unreachable(String),

    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_name(kind: VariableKind, name: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidName {
            kind,
            name: name.into(),
            reason,
        }
    }

    pub fn unknown(kind: VariableKind, name: impl Into<String>) -> Self {
        Self::Unknown {
            kind,
            name: name.into(),
        }
    }

    pub fn duplicate(kind: VariableKind, name: impl Into<String>) -> Self {
        Self::Duplicate {
            kind,
            name: name.into(),
        }
    }
}
