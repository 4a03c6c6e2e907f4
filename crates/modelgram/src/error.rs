//! Error types for Modelgram operations.
//!
//! This module provides the main error type [`ModelgramError`] which wraps
//! the error conditions that can occur between reading a model snapshot and
//! producing a shareable URL. Generating the diagram text itself cannot fail.

use std::io;

use thiserror::Error;

use modelgram_registry::RegistryError;

/// The main error type for Modelgram operations.
///
/// The `Registry` variant keeps the snapshot source next to the error so
/// callers can point at the offending span.
#[derive(Debug, Error)]
pub enum ModelgramError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Registry { err: RegistryError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Encoding error: {0}")]
    Encode(#[source] io::Error),
}

impl ModelgramError {
    /// Create a new `Registry` error with the associated snapshot source.
    pub fn new_registry_error(err: RegistryError, src: impl Into<String>) -> Self {
        Self::Registry {
            err,
            src: src.into(),
        }
    }
}
