//! Store-agnostic predicate AST and its builder

use serde_json::Value;

/// A match/no-match expression over a single document.
///
/// Field names are top-level document keys. Each store translates the AST
/// into its own query language; semantics follow MongoDB (an `Eq` on an
/// array-valued field is a membership test).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Predicate {
    /// Matches every document
    #[default]
    All,
    /// Exact match, or membership when the field holds an array
    Eq { field: String, value: Value },
    /// Case-insensitive substring match on literal text
    ContainsText { field: String, needle: String },
    /// Inclusive numeric range; `None` leaves that side open
    Range {
        field: String,
        min: Option<i64>,
        max: Option<i64>,
    },
    /// Field presence
    Exists { field: String, exists: bool },
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn equals(field: &str, value: impl Into<Value>) -> Self {
        Self::Eq {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn contains_text(field: &str, needle: &str) -> Self {
        Self::ContainsText {
            field: field.to_string(),
            needle: needle.to_string(),
        }
    }

    /// Conjunction that collapses trivial cases (`All` terms are dropped,
    /// a single remaining term is returned as-is)
    pub fn all_of(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        let mut terms: Vec<Predicate> = predicates
            .into_iter()
            .filter(|p| *p != Predicate::All)
            .collect();
        match terms.len() {
            0 => Predicate::All,
            1 => terms.remove(0),
            _ => Predicate::And(terms),
        }
    }
}

/// Builder for conjunctive filters from optional parameters.
///
/// Every `add_*` method is a no-op when its parameter is `None`, so absent
/// parameters never constrain the result.
#[derive(Debug, Default)]
pub struct PredicateBuilder {
    conditions: Vec<Predicate>,
}

impl PredicateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exact match (membership for array fields)
    pub fn add_eq(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.conditions.push(Predicate::equals(field, value));
        }
        self
    }

    /// Add a case-insensitive substring match
    pub fn add_contains(&mut self, field: &str, needle: Option<&str>) -> &mut Self {
        if let Some(needle) = needle {
            self.conditions.push(Predicate::contains_text(field, needle));
        }
        self
    }

    /// Add a search term that may match any of `fields`
    pub fn add_any_contains(&mut self, fields: &[&str], needle: Option<&str>) -> &mut Self {
        if let Some(needle) = needle {
            self.conditions.push(Predicate::Or(
                fields
                    .iter()
                    .map(|field| Predicate::contains_text(field, needle))
                    .collect(),
            ));
        }
        self
    }

    /// Add an inclusive range; both bounds land in one predicate
    pub fn add_range(&mut self, field: &str, min: Option<i64>, max: Option<i64>) -> &mut Self {
        if min.is_some() || max.is_some() {
            self.conditions.push(Predicate::Range {
                field: field.to_string(),
                min,
                max,
            });
        }
        self
    }

    /// Build the conjunction of all added conditions (`All` when empty)
    pub fn build(&self) -> Predicate {
        Predicate::all_of(self.conditions.iter().cloned())
    }
}
