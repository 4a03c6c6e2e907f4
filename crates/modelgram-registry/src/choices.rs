//! Normalization of the choice representations found in model snapshots.
//!
//! The model layer declares enumerated choices in several shapes. All of
//! them are folded into a single [`Choices`] value here, so the renderer
//! never has to look at how a field spelled its choices:
//!
//! ```toml
//! # Named enumeration container: a display mapping keyed by member value.
//! choices = { members = [{ name = "DRAFT", value = "d", label = "Draft" }] }
//!
//! # Fixed sequence of pairs.
//! choices = [["d", "Draft"], ["p", "Published"]]
//!
//! # List of pair records.
//! choices = [{ value = "d", label = "Draft" }]
//! ```

use std::fmt;

use log::warn;
use serde::{Deserialize, de::IgnoredAny};

use modelgram_core::choices::Choices;

/// A choice value or label as written in the snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{value}"),
            Scalar::Integer(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Text(value) => f.write_str(value),
        }
    }
}

/// A member of a named enumeration container.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumMember {
    /// Identifier used in code, e.g. `DRAFT`.
    pub name: String,
    /// Stored value. Defaults to `name`.
    #[serde(default)]
    pub value: Option<Scalar>,
    /// Display label. Defaults to `name`.
    #[serde(default)]
    pub label: Option<Scalar>,
}

/// A `{ value, label }` record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PairRecord {
    pub value: Scalar,
    pub label: Scalar,
}

/// Choices exactly as declared in the snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawChoices {
    /// Named enumeration container.
    Enumeration { members: Vec<EnumMember> },
    /// Fixed sequence of `[value, label]` pairs.
    Pairs(Vec<(Scalar, Scalar)>),
    /// Sequence of `{ value, label }` records.
    Records(Vec<PairRecord>),
    /// Anything else; normalizes to no choices.
    Unrecognized(Unrecognized),
}

/// Marker for a representation none of the known shapes accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Unrecognized;

impl<'de> Deserialize<'de> for Unrecognized {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Self)
    }
}

impl RawChoices {
    /// Flattens the declared choices into `value -> label` pairs.
    ///
    /// Returns `None` for an unrecognized representation or an empty set.
    /// `field` is only used for logging.
    pub fn normalize(&self, field: &str) -> Option<Choices> {
        let choices: Choices = match self {
            RawChoices::Enumeration { members } => members
                .iter()
                .map(|member| {
                    let value = member
                        .value
                        .as_ref()
                        .map_or_else(|| member.name.clone(), Scalar::to_string);
                    let label = member
                        .label
                        .as_ref()
                        .map_or_else(|| member.name.clone(), Scalar::to_string);
                    (value, label)
                })
                .collect(),
            RawChoices::Pairs(pairs) => pairs
                .iter()
                .map(|(value, label)| (value.to_string(), label.to_string()))
                .collect(),
            RawChoices::Records(records) => records
                .iter()
                .map(|record| (record.value.to_string(), record.label.to_string()))
                .collect(),
            RawChoices::Unrecognized(_) => {
                warn!(field; "Ignoring choices in an unrecognized representation");
                return None;
            }
        };

        (!choices.is_empty()).then_some(choices)
    }
}
