//! Whole-diagram assembly.
//!
//! Walks the models in registry order, renders each one, and gathers the
//! choice sets they declare into a single accumulator that is written out
//! after all entities.

use indexmap::IndexMap;
use log::{debug, info, trace};

use modelgram_core::{choices::Choices, model::ModelDescriptor};

use crate::{
    config::{AppConfig, RenderConfig},
    filter::{Scope, is_historical},
    render::{INDENT, render_entity},
};

/// Block explaining the field signs.
pub const LEGEND: &str = "\
class \"Explanation of the symbols used\" as DESCRIPTION #FFF {
    - AutoField (identifiers)
    ..
    + Regular field (anything)
    ..
    # ForeignKey (ManyToMany)
    ..
    ~ ForeignKey (OneToOne, OneToMany)
    --
}

";

/// Generates the PlantUML document for `models`.
///
/// Models are emitted in the given order. Models outside the configured
/// scope, and historical models when they are excluded, are skipped.
///
/// Choice sets are merged by name: without namespacing, a later model's set
/// replaces an earlier set of the same name (keeping the earlier position).
pub fn generate(models: &[ModelDescriptor], config: &AppConfig) -> String {
    let render = config.render();
    let filter = config.filter();
    let scope = Scope::new(filter.include(), filter.omit());

    let mut document = String::new();
    document.push_str(&header(render));
    if render.legend() {
        document.push_str(LEGEND);
    }

    let mut choice_sets: IndexMap<String, Choices> = IndexMap::new();
    let mut rendered = 0usize;
    for model in models {
        let name = model.name();
        if !scope.contains(name) {
            debug!(model = name.as_str(); "Skipping model outside the filter");
            continue;
        }
        if filter.exclude_history() && is_historical(model, filter.history_bases()) {
            debug!(model = name.as_str(); "Skipping historical model");
            continue;
        }

        let (block, sets) = render_entity(model, config);
        document.push_str(&block);
        for set in sets {
            let (set_name, choices) = set.into_parts();
            choice_sets.insert(set_name, choices);
        }
        rendered += 1;
    }

    if render.choices() {
        for (name, choices) in &choice_sets {
            document.push_str(&choice_block(name, choices, render));
        }
    }

    document.push_str("@enduml\n");

    info!(
        models_count = models.len(),
        rendered_count = rendered,
        choice_sets_count = choice_sets.len();
        "Diagram generated"
    );
    trace!(document; "Generated document");

    document
}

/// `@startuml` line and the optional title block.
fn header(render: &RenderConfig) -> String {
    match render.title() {
        Some(title) => format!(
            "@startuml {marker}\n\
             skinparam titleFontSize {size}\n\
             \n\
             title\n\
             {title}\n\
             end title\n\
             \n",
            marker = single_line(title),
            size = render.title_font_size(),
        ),
        None => "@startuml\n".to_string(),
    }
}

fn choice_block(name: &str, choices: &Choices, render: &RenderConfig) -> String {
    let mut block = format!(
        "enum \"{name} <choices>\" as {name} {color} {{\n",
        color = render.choices_color()
    );
    for (value, label) in choices.iter() {
        block.push_str(&format!(
            "{INDENT}+ {value} - {label}\n",
            value = single_line(value),
            label = single_line(label),
        ));
    }
    block.push_str("}\n\n");
    block
}

/// Joins the lines of `text` with spaces so it cannot break a block apart.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
