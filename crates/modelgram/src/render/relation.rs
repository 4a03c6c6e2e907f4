//! Relation edges between entities.

use log::debug;

use modelgram_core::model::{ModelDescriptor, Reference};

use super::connector;
use crate::{config::AppConfig, filter::Scope};

/// Renders one line per drawable reference leaving `model`.
///
/// Single-valued references come first, then many-to-many references, each
/// group in field order. A reference is drawn when its target was resolved
/// and either omitted headers are enabled or the target is in scope.
pub fn render_relations(model: &ModelDescriptor, config: &AppConfig) -> String {
    let filter = config.filter();
    let scope = Scope::new(filter.include(), filter.omit());
    let omitted_headers = config.render().omitted_headers();

    let references: Vec<&Reference> = model
        .all_fields()
        .filter_map(|field| field.kind().reference())
        .collect();
    let (multi, single): (Vec<&Reference>, Vec<&Reference>) = references
        .into_iter()
        .partition(|reference| reference.cardinality().is_multi());

    let mut out = String::new();
    for reference in single.into_iter().chain(multi) {
        let Some(target) = reference.target() else {
            debug!(model = model.name().as_str(); "Skipping relation to an unresolved target");
            continue;
        };

        if omitted_headers || scope.contains(target) {
            out.push_str(&format!(
                "{} {} {}\n",
                model.name(),
                connector(reference.cardinality()),
                target
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use modelgram_core::{
        model::{Cardinality, FieldDescriptor, FieldKind},
        name::QualifiedName,
    };

    use super::*;
    use crate::config::{FilterConfig, RenderConfig};

    fn name(label: &str) -> QualifiedName {
        label.parse().unwrap()
    }

    fn order() -> ModelDescriptor {
        ModelDescriptor::new(name("shop.Order"))
            .with_field(FieldDescriptor::new("id", "AutoField", FieldKind::Identifier))
            .with_many_to_many(FieldDescriptor::new(
                "items",
                "ManyToManyField",
                FieldKind::many_to_many(name("shop.Item")),
            ))
            .with_field(FieldDescriptor::new(
                "customer",
                "ForeignKey",
                FieldKind::foreign_key(name("crm.Customer")),
            ))
            .with_field(FieldDescriptor::new(
                "invoice",
                "OneToOneField",
                FieldKind::one_to_one(name("billing.Invoice")),
            ))
            .with_field(FieldDescriptor::new(
                "coupon",
                "ForeignKey",
                FieldKind::Reference(Reference::unresolved(Cardinality::ForeignKey)),
            ))
    }

    fn omitting(groups: &[&str]) -> AppConfig {
        let omit = groups.iter().map(|group| group.to_string()).collect();
        AppConfig::default().with_filter(FilterConfig::default().with_omit(omit))
    }

    #[test]
    fn test_order_and_connectors() {
        let relations = render_relations(&order(), &AppConfig::default());
        assert_eq!(
            relations,
            "shop.Order *-- crm.Customer\n\
             shop.Order *-- billing.Invoice\n\
             shop.Order *--* shop.Item\n"
        );
    }

    #[test]
    fn test_out_of_scope_targets_skipped() {
        let relations = render_relations(&order(), &omitting(&["crm"]));
        assert!(!relations.contains("crm.Customer"));
        assert!(relations.contains("shop.Order *-- billing.Invoice\n"));
    }

    #[test]
    fn test_include_list_limits_targets() {
        let config = AppConfig::default()
            .with_filter(FilterConfig::default().with_include(vec!["shop".to_string()]));
        let relations = render_relations(&order(), &config);
        assert_eq!(relations, "shop.Order *--* shop.Item\n");
    }

    #[test]
    fn test_omitted_headers_bypass_scope() {
        let config = omitting(&["crm", "billing", "shop"])
            .with_render(RenderConfig::default().with_omitted_headers(true));
        let relations = render_relations(&order(), &config);
        assert_eq!(relations.lines().count(), 3);
        assert!(relations.contains("shop.Order *-- crm.Customer\n"));
    }

    #[test]
    fn test_no_references() {
        let model = ModelDescriptor::new(name("shop.Item"))
            .with_field(FieldDescriptor::new("id", "AutoField", FieldKind::Identifier));
        assert_eq!(render_relations(&model, &AppConfig::default()), "");
    }
}
