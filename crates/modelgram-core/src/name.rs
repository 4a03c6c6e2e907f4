//! Qualified model names.
//!
//! Every model is addressed as `group.Entity`, where the group is the
//! application (namespace) the model belongs to. [`QualifiedName`] keeps
//! the full label and remembers where the separator sits so the group and
//! entity segments can be borrowed without re-parsing.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error returned when a label is not of the form `group.Entity`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid qualified name `{label}`: expected `group.Entity`")]
pub struct InvalidName {
    label: String,
}

impl InvalidName {
    /// Returns the rejected label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A model label of the form `group.Entity`.
///
/// # Examples
///
/// ```
/// use modelgram_core::name::QualifiedName;
///
/// let name: QualifiedName = "billing.Invoice".parse().unwrap();
/// assert_eq!(name.group(), "billing");
/// assert_eq!(name.entity(), "Invoice");
/// assert!(name.is_member_of("billing"));
/// assert!(!name.is_member_of("bill"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    label: String,
    separator: usize,
}

impl QualifiedName {
    /// Builds a name from its group and entity segments.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidName`] when either segment is empty or contains a `.`.
    pub fn new(group: &str, entity: &str) -> Result<Self, InvalidName> {
        format!("{group}.{entity}").parse()
    }

    /// Returns the full `group.Entity` label.
    pub fn as_str(&self) -> &str {
        &self.label
    }

    /// Returns the group segment.
    pub fn group(&self) -> &str {
        &self.label[..self.separator]
    }

    /// Returns the entity segment.
    pub fn entity(&self) -> &str {
        &self.label[self.separator + 1..]
    }

    /// Returns `true` when the label starts with `group` followed by a `.`.
    ///
    /// Only whole group segments match: `billing.Invoice` is a member of
    /// `billing` but not of `bill`.
    pub fn is_member_of(&self, group: &str) -> bool {
        self.label
            .strip_prefix(group)
            .is_some_and(|rest| rest.starts_with('.'))
    }
}

impl FromStr for QualifiedName {
    type Err = InvalidName;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidName {
            label: label.to_string(),
        };

        let (group, entity) = label.split_once('.').ok_or_else(invalid)?;
        if group.is_empty() || entity.is_empty() || entity.contains('.') {
            return Err(invalid());
        }

        Ok(Self {
            label: label.to_string(),
            separator: group.len(),
        })
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.label
    }
}

impl PartialEq<str> for QualifiedName {
    fn eq(&self, other: &str) -> bool {
        self.label == other
    }
}

impl PartialEq<&str> for QualifiedName {
    fn eq(&self, other: &&str) -> bool {
        self.label == *other
    }
}
