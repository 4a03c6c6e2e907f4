//! Error types for reading model snapshots.

use std::ops::Range;

use thiserror::Error;

use modelgram_core::name::InvalidName;

/// Errors raised while turning a snapshot into model descriptors.
///
/// Degraded input that still yields a usable diagram (unknown relation
/// targets, unrecognized choices) is logged instead of reported here.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The snapshot is not valid TOML or does not have the expected shape.
    #[error("invalid model snapshot: {message}")]
    Syntax {
        message: String,
        span: Option<Range<usize>>,
    },

    #[error(transparent)]
    InvalidName(#[from] InvalidName),

    #[error("model `{0}` is declared more than once")]
    DuplicateModel(String),

    #[error("field `{field}` is declared more than once on model `{model}`")]
    DuplicateField { model: String, field: String },

    #[error("reference field `{model}.{field}` declares no target")]
    MissingTarget { model: String, field: String },
}

impl RegistryError {
    /// Returns the byte range in the snapshot source the error points at.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            RegistryError::Syntax { span, .. } => span.clone(),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for RegistryError {
    fn from(err: toml::de::Error) -> Self {
        Self::Syntax {
            message: err.message().to_string(),
            span: err.span(),
        }
    }
}
