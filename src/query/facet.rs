//! Grouping descriptions for count facets

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Group-and-count over one field.
///
/// With `unwind`, an array-valued field contributes one row per element
/// before grouping; documents where the field is missing, null or an empty
/// array contribute nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetSpec {
    pub field: String,
    pub unwind: bool,
    pub limit: Option<usize>,
}

impl FacetSpec {
    /// Group on a single-valued field
    pub fn single(field: &str) -> Self {
        Self {
            field: field.to_string(),
            unwind: false,
            limit: None,
        }
    }

    /// Group on the elements of an array-valued field
    pub fn unwound(field: &str) -> Self {
        Self {
            field: field.to_string(),
            unwind: true,
            limit: None,
        }
    }

    /// Keep only the `limit` largest groups
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// One group of a facet: a distinct value and how often it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub name: String,
    pub count: u64,
}

impl Facet {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Group key for a JSON value; null and empty strings yield no group
pub(crate) fn facet_key(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Order facets by count descending, then name ascending, and apply the limit
pub(crate) fn rank_facets(mut facets: Vec<Facet>, limit: Option<usize>) -> Vec<Facet> {
    facets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    if let Some(limit) = limit {
        facets.truncate(limit);
    }
    facets
}
