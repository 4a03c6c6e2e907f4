//! Model selection.
//!
//! Decides which models are drawn and which relations lead somewhere worth
//! drawing. Groups are matched on whole segments of the qualified name, so
//! `billing` selects `billing.Invoice` but not `billing_archive.Invoice`.

use modelgram_core::{model::ModelDescriptor, name::QualifiedName};

/// Include/omit lists applied to qualified model names.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    include: &'a [String],
    omit: &'a [String],
}

impl<'a> Scope<'a> {
    pub fn new(include: &'a [String], omit: &'a [String]) -> Self {
        Self { include, omit }
    }

    /// Returns `true` when `name` passes both lists.
    ///
    /// A non-empty include list is a strict allow-list and is checked first;
    /// any matching omit entry then excludes the name.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelgram::filter::Scope;
    ///
    /// let include = vec!["billing".to_string()];
    /// let scope = Scope::new(&include, &[]);
    /// assert!(scope.contains(&"billing.Invoice".parse().unwrap()));
    /// assert!(!scope.contains(&"shipping.Order".parse().unwrap()));
    /// ```
    pub fn contains(&self, name: &QualifiedName) -> bool {
        if self.include.is_empty() && self.omit.is_empty() {
            return true;
        }

        if !self.include.is_empty() && !self.include.iter().any(|group| name.is_member_of(group)) {
            return false;
        }

        !self.omit.iter().any(|group| name.is_member_of(group))
    }
}

/// Returns `true` when the model descends from one of `history_bases`.
///
/// A lineage entry matches a base when it equals the base or lives under it,
/// e.g. `simple_history.models.HistoricalChanges.Meta` matches
/// `simple_history.models.HistoricalChanges`.
pub fn is_historical(model: &ModelDescriptor, history_bases: &[String]) -> bool {
    model.lineage().iter().any(|ancestor| {
        history_bases.iter().any(|base| {
            ancestor
                .strip_prefix(base.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::DEFAULT_HISTORY_BASE;

    fn name(label: &str) -> QualifiedName {
        label.parse().unwrap()
    }

    fn groups(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_empty_lists_include_everything() {
        let scope = Scope::new(&[], &[]);
        assert!(scope.contains(&name("billing.Invoice")));
        assert!(scope.contains(&name("shipping.Order")));
    }

    #[test]
    fn test_include_is_allow_list() {
        let include = groups(&["billing"]);
        let scope = Scope::new(&include, &[]);
        assert!(scope.contains(&name("billing.Invoice")));
        assert!(!scope.contains(&name("shipping.Order")));
    }

    #[test]
    fn test_omit_excludes() {
        let omit = groups(&["shipping"]);
        let scope = Scope::new(&[], &omit);
        assert!(!scope.contains(&name("shipping.Order")));
        assert!(scope.contains(&name("billing.Invoice")));
        assert!(scope.contains(&name("auth.User")));
    }

    #[test]
    fn test_omit_wins_over_include() {
        let include = groups(&["billing", "shipping"]);
        let omit = groups(&["shipping"]);
        let scope = Scope::new(&include, &omit);
        assert!(scope.contains(&name("billing.Invoice")));
        assert!(!scope.contains(&name("shipping.Order")));
        assert!(!scope.contains(&name("auth.User")));
    }

    #[test]
    fn test_group_prefix_must_be_whole_segment() {
        let include = groups(&["bill"]);
        let scope = Scope::new(&include, &[]);
        assert!(!scope.contains(&name("billing.Invoice")));
    }

    #[test]
    fn test_is_historical() {
        let bases = groups(&[DEFAULT_HISTORY_BASE]);

        let historical = ModelDescriptor::new(name("library.HistoricalBook")).with_lineage([
            "simple_history.models.HistoricalChanges",
            "django.db.models.Model",
        ]);
        assert!(is_historical(&historical, &bases));

        let regular = ModelDescriptor::new(name("library.Book"))
            .with_lineage(["django.db.models.Model"]);
        assert!(!is_historical(&regular, &bases));

        let lookalike = ModelDescriptor::new(name("library.Changes"))
            .with_lineage(["simple_history.models.HistoricalChangesMixin"]);
        assert!(!is_historical(&lookalike, &bases));

        assert!(!is_historical(&historical, &[]));
    }
}
