//! Model and field descriptors.
//!
//! These types are a read-only snapshot of the model layer's metadata as
//! handed over by a registry adapter. The adapter is responsible for
//! resolving relation targets and normalizing choices, so everything here
//! is already in its final shape.
//!
//! # Example
//!
//! ```
//! use modelgram_core::model::{FieldDescriptor, FieldKind, ModelDescriptor};
//!
//! let author = "library.Author".parse().unwrap();
//! let book = ModelDescriptor::new("library.Book".parse().unwrap())
//!     .with_group_label("Library")
//!     .with_field(FieldDescriptor::new("id", "AutoField", FieldKind::Identifier))
//!     .with_field(FieldDescriptor::new(
//!         "author",
//!         "ForeignKey",
//!         FieldKind::foreign_key(author),
//!     ));
//!
//! assert_eq!(book.group_label(), "Library");
//! assert_eq!(book.all_fields().count(), 2);
//! ```

use crate::{choices::Choices, name::QualifiedName};

/// How many target rows a reference field points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    ForeignKey,
    OneToOne,
    ManyToMany,
}

impl Cardinality {
    /// Returns `true` for references that hold many targets.
    pub fn is_multi(self) -> bool {
        matches!(self, Cardinality::ManyToMany)
    }
}

/// A link from a field to another model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    cardinality: Cardinality,
    target: Option<QualifiedName>,
}

impl Reference {
    /// Creates a reference to a resolved target.
    pub fn new(cardinality: Cardinality, target: QualifiedName) -> Self {
        Self {
            cardinality,
            target: Some(target),
        }
    }

    /// Creates a reference whose target could not be resolved.
    ///
    /// The field is still listed on its model, but no relation edge is drawn.
    pub fn unresolved(cardinality: Cardinality) -> Self {
        Self {
            cardinality,
            target: None,
        }
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Returns the target model, or `None` if it was never resolved.
    pub fn target(&self) -> Option<&QualifiedName> {
        self.target.as_ref()
    }
}

/// Category of a field, decided once when the descriptor is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Auto-generated identifiers and timestamps.
    Identifier,
    /// Anything that is neither an identifier nor a reference.
    Plain,
    Reference(Reference),
}

impl FieldKind {
    pub fn foreign_key(target: QualifiedName) -> Self {
        Self::Reference(Reference::new(Cardinality::ForeignKey, target))
    }

    pub fn one_to_one(target: QualifiedName) -> Self {
        Self::Reference(Reference::new(Cardinality::OneToOne, target))
    }

    pub fn many_to_many(target: QualifiedName) -> Self {
        Self::Reference(Reference::new(Cardinality::ManyToMany, target))
    }

    /// Returns the reference carried by this kind, if any.
    pub fn reference(&self) -> Option<&Reference> {
        match self {
            FieldKind::Reference(reference) => Some(reference),
            FieldKind::Identifier | FieldKind::Plain => None,
        }
    }
}

/// A single attribute of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    type_name: String,
    kind: FieldKind,
    help: Option<String>,
    choices: Option<Choices>,
}

impl FieldDescriptor {
    /// Creates a field descriptor.
    ///
    /// # Arguments
    ///
    /// * `name` - Attribute name on the model.
    /// * `type_name` - Declared field type as the model layer names it, e.g. `CharField`.
    /// * `kind` - Category used to pick the diagram sign and relations.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind,
            help: None,
            choices: None,
        }
    }

    /// Sets the help text. Empty text is treated as absent.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        let help = help.into();
        self.help = (!help.trim().is_empty()).then_some(help);
        self
    }

    /// Sets the enumerated choices. An empty set is treated as absent.
    pub fn with_choices(mut self, choices: Choices) -> Self {
        self.choices = (!choices.is_empty()).then_some(choices);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn choices(&self) -> Option<&Choices> {
        self.choices.as_ref()
    }
}

/// A model class with its fields and inheritance lineage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    name: QualifiedName,
    group_label: String,
    verbose_name: String,
    doc: Option<String>,
    fields: Vec<FieldDescriptor>,
    many_to_many: Vec<FieldDescriptor>,
    lineage: Vec<String>,
}

impl ModelDescriptor {
    /// Creates a descriptor with no fields.
    ///
    /// The group label defaults to the group segment of `name` and the
    /// verbose name to its entity segment.
    pub fn new(name: QualifiedName) -> Self {
        Self {
            group_label: name.group().to_string(),
            verbose_name: name.entity().to_string(),
            name,
            doc: None,
            fields: Vec::new(),
            many_to_many: Vec::new(),
            lineage: Vec::new(),
        }
    }

    pub fn with_group_label(mut self, group_label: impl Into<String>) -> Self {
        self.group_label = group_label.into();
        self
    }

    pub fn with_verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
        self.verbose_name = verbose_name.into();
        self
    }

    /// Sets the documentation text. Blank text is treated as absent.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        let doc = doc.into();
        self.doc = (!doc.trim().is_empty()).then_some(doc);
        self
    }

    /// Appends a regular field.
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a many-to-many field. These are listed after regular fields.
    pub fn with_many_to_many(mut self, field: FieldDescriptor) -> Self {
        self.many_to_many.push(field);
        self
    }

    /// Sets the ancestor paths, nearest first.
    pub fn with_lineage<I, S>(mut self, lineage: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lineage = lineage.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    /// Returns the human-readable name of the owning group.
    pub fn group_label(&self) -> &str {
        &self.group_label
    }

    pub fn verbose_name(&self) -> &str {
        &self.verbose_name
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn many_to_many(&self) -> &[FieldDescriptor] {
        &self.many_to_many
    }

    /// Iterates over regular fields followed by many-to-many fields.
    pub fn all_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().chain(&self.many_to_many)
    }

    pub fn lineage(&self) -> &[String] {
        &self.lineage
    }
}
