//! Model registry adapter for Modelgram.
//!
//! Reads a TOML snapshot of an ORM model registry and turns it into
//! [`ModelDescriptor`]s. This is the only place that deals with how the
//! model layer spells things: relation targets are resolved to models of the
//! snapshot, field types are mapped to [`FieldKind`]s, and the different
//! choice representations are normalized into one shape.
//!
//! [`FieldKind`]: modelgram_core::model::FieldKind
//!
//! # Example
//!
//! ```
//! let source = r#"
//!     [[models]]
//!     label = "library.Author"
//!     fields = [{ name = "id", kind = "auto" }]
//!
//!     [[models]]
//!     label = "library.Book"
//!     fields = [
//!         { name = "id", kind = "auto" },
//!         { name = "author", kind = "foreign_key", target = "library.Author" },
//!     ]
//! "#;
//!
//! let models = modelgram_registry::parse(source).unwrap();
//! assert_eq!(models.len(), 2);
//! assert_eq!(models[1].name(), "library.Book");
//! ```

pub mod choices;
pub mod error;

mod snapshot;

pub use error::RegistryError;

use log::{debug, info};

use modelgram_core::model::ModelDescriptor;

use snapshot::RawSnapshot;

/// Parses a TOML model snapshot into descriptors, preserving model order.
///
/// # Errors
///
/// Returns [`RegistryError`] when the source is not valid TOML, does not
/// match the snapshot layout, declares a model twice, uses a label that is
/// not `group.Entity`, or declares a reference field without a target.
pub fn parse(source: &str) -> Result<Vec<ModelDescriptor>, RegistryError> {
    info!("Reading model snapshot");

    let snapshot: RawSnapshot = toml::from_str(source)?;
    let models = snapshot.into_models()?;

    debug!(models_count = models.len(); "Model snapshot converted");
    Ok(models)
}
