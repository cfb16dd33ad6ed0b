//! Error types for form construction and loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for case-forms operations
pub type Result<T> = std::result::Result<T, FormError>;

/// Errors raised while building or loading a form.
///
/// Navigation and completion updates never fail; out-of-range requests are
/// ignored instead.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("A multi-step form needs at least one step")]
    EmptyForm,

    #[error("Duplicate step id: {id}")]
    DuplicateStep { id: String },

    #[error("Duplicate field id {field} in step {step}")]
    DuplicateField { step: String, field: String },

    #[error("Invalid pattern for field {field}: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to read form definition {path}: {source}")]
    DefinitionRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Form definition parse error: {0}")]
    Definition(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
