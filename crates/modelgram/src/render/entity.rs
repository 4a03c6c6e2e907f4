//! Entity blocks.
//!
//! A model renders as:
//!
//! ```text
//! class "library.Book <Library>" as library.Book #e4f6d3 {
//!     book
//!     ..
//!     A published book.
//!     --
//!     - id (AutoField)
//!     ~ author (ForeignKey) - Primary author
//!     + status (CharField)
//!     --
//! }
//! library.Book *-- library.Author
//! library.Book .. status
//! ```
//!
//! followed by two blank lines.

use indexmap::IndexMap;
use log::trace;
use unicode_width::UnicodeWidthStr;

use modelgram_core::{
    choices::{ChoiceSet, Choices},
    color::Color,
    model::{FieldDescriptor, ModelDescriptor},
};

use super::{CHOICE_CONNECTOR, INDENT, collect_choices, field_sign, render_relations};
use crate::{
    config::{AppConfig, RenderConfig},
    wrap::wrap,
};

/// Text shown when a model has no documentation.
pub const MISSING_DOC: &str = "No documentation";

/// Renders `model` as a class block followed by its edges.
///
/// Returns the block and the choice sets collected from the model's fields,
/// in field order. Sets are keyed by name: a later field with the same set
/// name replaces the earlier choices and the cross reference is drawn once.
/// Choice sets are collected even in headers-only mode, when the field lines
/// themselves are not printed.
pub fn render_entity(model: &ModelDescriptor, config: &AppConfig) -> (String, Vec<ChoiceSet>) {
    let render = config.render();
    let name = model.name();
    let mut out = String::new();

    out.push_str(&format!(
        "class \"{name} <{group_label}>\" as {name} {color} {{\n",
        group_label = model.group_label(),
        color = Color::for_group(name.group()),
    ));
    out.push_str(&format!("{INDENT}{}\n", model.verbose_name()));

    if render.help() {
        out.push_str(&format!("{INDENT}..\n"));
        out.push_str(&format!("{INDENT}{}\n", doc_text(model, render)));
    }
    out.push_str(&format!("{INDENT}--\n"));

    let mut collected: IndexMap<String, Choices> = IndexMap::new();
    for field in model.all_fields() {
        if !render.headers_only() {
            out.push_str(&field_line(field, render));
            out.push('\n');
        }
        if let Some(set) = collect_choices(model, field, render) {
            let (set_name, choices) = set.into_parts();
            collected.insert(set_name, choices);
        }
    }
    let choice_sets: Vec<ChoiceSet> = collected
        .into_iter()
        .map(|(set_name, choices)| ChoiceSet::new(set_name, choices))
        .collect();

    out.push_str(&format!("{INDENT}--\n"));
    out.push_str("}\n");

    out.push_str(&render_relations(model, config));

    if render.choices() {
        for set in &choice_sets {
            out.push_str(&format!("{name} {CHOICE_CONNECTOR} {}\n", set.name()));
        }
    }

    out.push_str("\n\n");

    trace!(model = name.as_str(), choice_sets = choice_sets.len(); "Entity rendered");
    (out, choice_sets)
}

/// Documentation wrapped to the body indentation, blank lines dropped.
fn doc_text(model: &ModelDescriptor, render: &RenderConfig) -> String {
    let doc = model.doc().unwrap_or(MISSING_DOC);
    let doc = doc
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    wrap(&doc, render.wrap_width(), INDENT.len())
}

/// A single field line, without the trailing line break.
fn field_line(field: &FieldDescriptor, render: &RenderConfig) -> String {
    let mut line = format!(
        "{INDENT}{sign} {name} ({type_name})",
        sign = field_sign(field.kind()),
        name = field.name(),
        type_name = field.type_name(),
    );

    if let Some(help) = field.help().filter(|_| render.help()) {
        line.push_str(" - ");
        let help = wrap(help, render.wrap_width(), line.width());
        line.push_str(&help);
    }

    line
}
