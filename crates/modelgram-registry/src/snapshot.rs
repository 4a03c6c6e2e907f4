//! Raw snapshot layout and conversion into descriptors.

use std::collections::HashSet;

use log::{debug, warn};
use serde::Deserialize;

use modelgram_core::{
    model::{Cardinality, FieldDescriptor, FieldKind, ModelDescriptor, Reference},
    name::QualifiedName,
};

use crate::{choices::RawChoices, error::RegistryError};

/// Relation target that refers to the declaring model itself.
const SELF_TARGET: &str = "self";

#[derive(Debug, Deserialize)]
pub(crate) struct RawSnapshot {
    #[serde(default)]
    models: Vec<RawModel>,
}

#[derive(Debug, Deserialize)]
struct RawModel {
    label: String,
    group_label: Option<String>,
    verbose_name: Option<String>,
    doc: Option<String>,
    #[serde(default)]
    lineage: Vec<String>,
    #[serde(default)]
    fields: Vec<RawField>,
    #[serde(default)]
    many_to_many: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    type_name: Option<String>,
    #[serde(default)]
    kind: RawKind,
    target: Option<String>,
    help: Option<String>,
    choices: Option<RawChoices>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawKind {
    Auto,
    #[default]
    Plain,
    ForeignKey,
    OneToOne,
    ManyToMany,
}

impl RawKind {
    fn cardinality(self) -> Option<Cardinality> {
        match self {
            RawKind::Auto | RawKind::Plain => None,
            RawKind::ForeignKey => Some(Cardinality::ForeignKey),
            RawKind::OneToOne => Some(Cardinality::OneToOne),
            RawKind::ManyToMany => Some(Cardinality::ManyToMany),
        }
    }

    /// Type name used when the snapshot omits `type`.
    fn default_type_name(self) -> &'static str {
        match self {
            RawKind::Auto => "AutoField",
            RawKind::Plain => "Field",
            RawKind::ForeignKey => "ForeignKey",
            RawKind::OneToOne => "OneToOneField",
            RawKind::ManyToMany => "ManyToManyField",
        }
    }
}

impl RawSnapshot {
    /// Builds descriptors in declaration order, resolving relation targets
    /// against the models present in the snapshot.
    pub(crate) fn into_models(self) -> Result<Vec<ModelDescriptor>, RegistryError> {
        let mut known = HashSet::new();
        let mut names = Vec::with_capacity(self.models.len());
        for model in &self.models {
            let name: QualifiedName = model.label.parse()?;
            if !known.insert(name.clone()) {
                return Err(RegistryError::DuplicateModel(model.label.clone()));
            }
            names.push(name);
        }

        let resolver = Resolver { known: &known };
        self.models
            .into_iter()
            .zip(names)
            .map(|(model, name)| resolver.model(model, name))
            .collect()
    }
}

struct Resolver<'a> {
    known: &'a HashSet<QualifiedName>,
}

impl Resolver<'_> {
    fn model(&self, raw: RawModel, name: QualifiedName) -> Result<ModelDescriptor, RegistryError> {
        debug!(model = name.as_str(); "Converting model");

        let mut model = ModelDescriptor::new(name.clone()).with_lineage(raw.lineage);
        if let Some(group_label) = raw.group_label {
            model = model.with_group_label(group_label);
        }
        if let Some(verbose_name) = raw.verbose_name {
            model = model.with_verbose_name(verbose_name);
        }
        if let Some(doc) = raw.doc {
            model = model.with_doc(doc);
        }

        let mut seen = HashSet::new();
        for field in raw.fields.iter().chain(&raw.many_to_many) {
            if !seen.insert(field.name.as_str()) {
                return Err(RegistryError::DuplicateField {
                    model: name.to_string(),
                    field: field.name.clone(),
                });
            }
        }

        for field in raw.fields {
            model = model.with_field(self.field(&name, field)?);
        }
        for field in raw.many_to_many {
            model = model.with_many_to_many(self.field(&name, field)?);
        }

        Ok(model)
    }

    fn field(&self, owner: &QualifiedName, raw: RawField) -> Result<FieldDescriptor, RegistryError> {
        let kind = match raw.kind.cardinality() {
            None if raw.kind == RawKind::Auto => FieldKind::Identifier,
            None => FieldKind::Plain,
            Some(cardinality) => {
                let target = raw.target.as_deref().ok_or_else(|| RegistryError::MissingTarget {
                    model: owner.to_string(),
                    field: raw.name.clone(),
                })?;
                FieldKind::Reference(self.reference(owner, &raw.name, cardinality, target))
            }
        };

        let type_name = raw
            .type_name
            .unwrap_or_else(|| raw.kind.default_type_name().to_string());
        let mut field = FieldDescriptor::new(&raw.name, type_name, kind);
        if let Some(help) = raw.help {
            field = field.with_help(help);
        }
        if let Some(choices) = raw.choices.and_then(|choices| choices.normalize(&raw.name)) {
            field = field.with_choices(choices);
        }

        Ok(field)
    }

    /// Resolves `target` to a model of the snapshot.
    ///
    /// Accepts a full `group.Entity` label, a bare entity name in the owner's
    /// group, or `self`.
    fn reference(
        &self,
        owner: &QualifiedName,
        field: &str,
        cardinality: Cardinality,
        target: &str,
    ) -> Reference {
        let resolved = if target == SELF_TARGET {
            Some(owner.clone())
        } else if target.contains('.') {
            target.parse::<QualifiedName>().ok()
        } else {
            QualifiedName::new(owner.group(), target).ok()
        };

        match resolved.filter(|name| self.known.contains(name)) {
            Some(name) => Reference::new(cardinality, name),
            None => {
                warn!(model = owner.as_str(), field, target; "Relation target is not in the registry");
                Reference::unresolved(cardinality)
            }
        }
    }
}
