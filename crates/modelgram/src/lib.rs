//! Modelgram - PlantUML class diagrams from ORM model metadata.
//!
//! Reads a snapshot of a model registry, renders every model as a PlantUML
//! class with its fields, relations and enumerated choices, and optionally
//! encodes the result into a URL for a PlantUML server.

pub mod config;
pub mod document;
pub mod filter;
pub mod render;
pub mod share;
pub mod wrap;

mod error;

pub use modelgram_core::{choices, color, model, name};

pub use error::ModelgramError;

use log::{debug, info};

use config::AppConfig;
use model::ModelDescriptor;

/// Builder for generating Modelgram diagrams.
///
/// This provides an API for taking a model snapshot through parsing,
/// diagram generation and URL encoding.
///
/// # Examples
///
/// ```rust
/// use modelgram::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"
///     [[models]]
///     label = "library.Author"
///     fields = [{ name = "id", kind = "auto" }]
/// "#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Parse the snapshot into model descriptors
/// let models = builder.parse(source).expect("Failed to parse");
///
/// // Generate the PlantUML document
/// let document = builder.generate(&models);
/// assert!(document.starts_with("@startuml"));
///
/// // Encode it for a PlantUML server
/// let url = builder.share_url(&document).expect("Failed to encode");
/// assert!(url.starts_with("https://www.plantuml.com/plantuml/png/"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including render, filter and share settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a TOML model snapshot into model descriptors.
    ///
    /// # Errors
    ///
    /// Returns `ModelgramError::Registry` for malformed snapshots, duplicate
    /// models, invalid labels or reference fields without a target.
    pub fn parse(&self, source: &str) -> Result<Vec<ModelDescriptor>, ModelgramError> {
        let models = modelgram_registry::parse(source)
            .map_err(|err| ModelgramError::new_registry_error(err, source))?;

        debug!(models_count = models.len(); "Snapshot parsed successfully");
        Ok(models)
    }

    /// Generate the PlantUML document for `models`.
    ///
    /// Models are drawn in the order given.
    pub fn generate(&self, models: &[ModelDescriptor]) -> String {
        info!(models_count = models.len(); "Generating diagram");
        document::generate(models, &self.config)
    }

    /// Encode a generated document into a shareable PlantUML server URL.
    ///
    /// # Errors
    ///
    /// Returns `ModelgramError::Encode` if the document cannot be compressed.
    pub fn share_url(&self, document: &str) -> Result<String, ModelgramError> {
        share::encode_for_sharing(document, self.config.share().base_url())
    }
}
