//! Error types for reference resolution

use crate::prelude::*;
use crate::value::Value;
use thiserror::Error;

/// Failures raised while reading, writing or deleting through a reference.
///
/// Host-reported failures (`TypeError`, `Thrown`) travel through the
/// reference core unchanged.
#[derive(Debug, Error)]
pub enum RefError {
    /// Read (or strict write) of a name that no scope or ambient host binds.
    #[error("ReferenceError: {name} is not defined")]
    UnresolvedBinding { name: String },

    /// Write through something that is not a location.
    #[error("ReferenceError: invalid assignment target {target}")]
    InvalidAssignment { target: String },

    #[error("TypeError: {message}")]
    TypeError { message: String },

    /// A value thrown by script code running inside a host getter or setter
    #[error("Thrown: {value:?}")]
    Thrown { value: Value },

    #[error("ConfigError: {message}")]
    Config { message: String },
}

/// Result type alias for reference operations
pub type Result<T> = core::result::Result<T, RefError>;

impl RefError {
    pub fn reference_error(name: impl Into<String>) -> Self {
        RefError::UnresolvedBinding { name: name.into() }
    }

    pub fn invalid_assignment(target: impl Into<String>) -> Self {
        RefError::InvalidAssignment {
            target: target.into(),
        }
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        RefError::TypeError {
            message: message.into(),
        }
    }

    pub fn thrown(value: Value) -> Self {
        RefError::Thrown { value }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        RefError::Config {
            message: message.into(),
        }
    }

    /// Would a script observe this as a ReferenceError?
    pub fn is_reference_error(&self) -> bool {
        matches!(
            self,
            RefError::UnresolvedBinding { .. } | RefError::InvalidAssignment { .. }
        )
    }

    /// The value a script `catch` clause would observe for this error.
    pub fn to_value(&self) -> Value {
        match self {
            RefError::Thrown { value } => value.clone(),
            other => Value::from(other.to_string()),
        }
    }
}
