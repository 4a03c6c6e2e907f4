//! PlantUML rendering of single models.
//!
//! - [`entity`] renders a model as a `class` block and collects its choice sets.
//! - [`relation`] renders the edges leaving a model.
//!
//! The symbols shared by both live here so the legend, the field lines and
//! the edges cannot drift apart.

pub mod entity;
pub mod relation;

pub use entity::render_entity;
pub use relation::render_relations;

use modelgram_core::{
    choices::ChoiceSet,
    model::{Cardinality, FieldDescriptor, FieldKind, ModelDescriptor},
};

use crate::config::RenderConfig;

/// Indentation of lines inside a block.
pub const INDENT: &str = "    ";

/// Connector from an entity to one of its choice sets.
pub const CHOICE_CONNECTOR: &str = "..";

/// Returns the sign that prefixes a field line.
///
/// | Sign | Field |
/// |------|-------|
/// | `-`  | identifiers |
/// | `~`  | foreign keys and one-to-one references |
/// | `#`  | many-to-many references |
/// | `+`  | everything else |
pub fn field_sign(kind: &FieldKind) -> char {
    match kind {
        FieldKind::Identifier => '-',
        FieldKind::Plain => '+',
        FieldKind::Reference(reference) if reference.cardinality().is_multi() => '#',
        FieldKind::Reference(_) => '~',
    }
}

/// Returns the connector drawn between a model and a reference target.
///
/// Single-valued references (foreign keys and one-to-one) share `*--`;
/// many-to-many references use `*--*`.
pub fn connector(cardinality: Cardinality) -> &'static str {
    match cardinality {
        Cardinality::ForeignKey | Cardinality::OneToOne => "*--",
        Cardinality::ManyToMany => "*--*",
    }
}

/// Returns the choice set `field` contributes to the diagram, if any.
///
/// Nothing is collected when choices are disabled, the field declares none,
/// or its name is in the skip list. The set is named after the field, or
/// `group.Entity_field` when choice namespacing is enabled.
pub fn collect_choices(
    model: &ModelDescriptor,
    field: &FieldDescriptor,
    config: &RenderConfig,
) -> Option<ChoiceSet> {
    if !config.choices() || config.skips_choices_of(field.name()) {
        return None;
    }

    let choices = field.choices()?;
    let name = if config.namespace_choices() {
        format!("{}_{}", model.name(), field.name())
    } else {
        field.name().to_string()
    };

    Some(ChoiceSet::new(name, choices.clone()))
}
