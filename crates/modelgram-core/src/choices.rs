//! Enumerated field choices.

use indexmap::IndexMap;

/// Ordered `value -> label` pairs declared on a field.
///
/// Declaration order is preserved; inserting an existing value replaces its
/// label in place.
///
/// # Examples
///
/// ```
/// use modelgram_core::choices::Choices;
///
/// let choices: Choices = [("A", "alpha"), ("B", "beta")].into_iter().collect();
/// let values: Vec<_> = choices.iter().map(|(value, _)| value).collect();
/// assert_eq!(values, ["A", "B"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choices {
    entries: IndexMap<String, String>,
}

impl Choices {
    /// Creates an empty set of choices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `value -> label` pair.
    pub fn insert(&mut self, value: impl Into<String>, label: impl Into<String>) {
        self.entries.insert(value.into(), label.into());
    }

    /// Returns the label declared for `value`.
    pub fn label(&self, value: &str) -> Option<&str> {
        self.entries.get(value).map(String::as_str)
    }

    /// Iterates over `(value, label)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(value, label)| (value.as_str(), label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V, L> FromIterator<(V, L)> for Choices
where
    V: Into<String>,
    L: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (V, L)>>(iter: I) -> Self {
        let mut choices = Self::new();
        for (value, label) in iter {
            choices.insert(value, label);
        }
        choices
    }
}

/// A named [`Choices`] block as it appears in the diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSet {
    name: String,
    choices: Choices,
}

impl ChoiceSet {
    pub fn new(name: impl Into<String>, choices: Choices) -> Self {
        Self {
            name: name.into(),
            choices,
        }
    }

    /// Returns the block name, e.g. `status` or `billing.Invoice_status`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn choices(&self) -> &Choices {
        &self.choices
    }

    /// Splits the set into its name and choices.
    pub fn into_parts(self) -> (String, Choices) {
        (self.name, self.choices)
    }
}
