//! Boolean filter expressions forwarded verbatim to search backends.
//!
//! A [`Filter`] is a tree of `@contains`/`@eq` predicates combined with
//! `@and`/`@or` connectives. The pipeline never evaluates filters itself;
//! it serializes them to the backend wire shape:
//!
//! ```text
//! {"@and": [...]} | {"@or": [...]} | {"@contains": {field: value}} | {"@eq": {field: value}}
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A boolean expression over record attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// All clauses must match.
    And(Vec<Filter>),
    /// At least one clause must match.
    Or(Vec<Filter>),
    /// Field contains the given value.
    Contains { field: String, value: String },
    /// Field equals the given value exactly.
    Eq { field: String, value: String },
}

impl Filter {
    pub fn and(clauses: Vec<Filter>) -> Self {
        Filter::And(clauses)
    }

    pub fn or(clauses: Vec<Filter>) -> Self {
        Filter::Or(clauses)
    }

    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Contains {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Eq {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Filter::And(clauses) => map.serialize_entry("@and", clauses)?,
            Filter::Or(clauses) => map.serialize_entry("@or", clauses)?,
            Filter::Contains { field, value } => {
                map.serialize_entry("@contains", &FieldValue { field, value })?;
            }
            Filter::Eq { field, value } => {
                map.serialize_entry("@eq", &FieldValue { field, value })?;
            }
        }
        map.end()
    }
}

/// Single-entry `{field: value}` map used inside predicate nodes.
struct FieldValue<'a> {
    field: &'a str,
    value: &'a str,
}

impl Serialize for FieldValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field, self.value)?;
        map.end()
    }
}
