//! Error adapter for converting ModelgramError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Snapshot errors
//! that carry a byte span are shown against the snapshot source.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use modelgram::ModelgramError;
use modelgram_registry::RegistryError;

/// Adapter for a snapshot error together with the snapshot source.
pub struct RegistryAdapter<'a> {
    err: &'a RegistryError,
    src: &'a str,
}

impl<'a> RegistryAdapter<'a> {
    /// Create a new registry adapter.
    pub fn new(err: &'a RegistryError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for RegistryAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for RegistryAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.err, f)
    }
}

impl std::error::Error for RegistryAdapter<'_> {}

impl MietteDiagnostic for RegistryAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            RegistryError::Syntax { .. } => "modelgram::registry::syntax",
            RegistryError::InvalidName(_) => "modelgram::registry::name",
            RegistryError::DuplicateModel(_) | RegistryError::DuplicateField { .. } => {
                "modelgram::registry::duplicate"
            }
            RegistryError::MissingTarget { .. } => "modelgram::registry::target",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err {
            RegistryError::InvalidName(_) => "model labels look like `group.Entity`",
            RegistryError::MissingTarget { .. } => {
                "reference fields need a `target` label such as `library.Author`"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.err
            .span()
            .map(|_| &self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("here".to_string()), span),
        )))
    }
}

/// Adapter for [`ModelgramError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a ModelgramError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ModelgramError::Io(_) => "modelgram::io",
            ModelgramError::Registry { .. } => "modelgram::registry",
            ModelgramError::Config(_) => "modelgram::config",
            ModelgramError::Encode(_) => "modelgram::encode",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A snapshot error with source location information.
    Registry(RegistryAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Registry(r) => fmt::Display::fmt(r, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Registry(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Registry(r) => r.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Registry(r) => r.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Registry(r) => r.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Registry(r) => r.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`ModelgramError`] into a list of reportable errors.
pub fn to_reportables(err: &ModelgramError) -> Vec<Reportable<'_>> {
    match err {
        ModelgramError::Registry { err, src } => {
            vec![Reportable::Registry(RegistryAdapter::new(err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
