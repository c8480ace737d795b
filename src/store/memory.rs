//! In-memory implementation of DocumentStore.
//!
//! Documents live in per-collection `Vec`s behind an async `RwLock` and are
//! filtered by evaluating the same `Predicate` AST the MongoDB store
//! translates, with MongoDB matching and ordering semantics. Used by the
//! test suite and by the `memory` backend for local runs.

use super::error::StoreError;
use super::traits::{Collection, DocumentStore};
use crate::query::facet::{facet_key, rank_facets};
use crate::query::sort::ID_FIELD;
use crate::query::{Facet, FacetSpec, Predicate, SortOrder, SortSpec};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use tokio::sync::RwLock;

type Document = Map<String, Value>;

/// In-memory document store
pub struct MemoryStore {
    documents: RwLock<HashMap<Collection, Vec<Document>>>,
    /// Highest id handed out per collection
    counters: RwLock<HashMap<Collection, i64>>,
    closed: AtomicBool,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            counters: RwLock::new(HashMap::new()),
            closed: AtomicBool::new(false),
        }
    }

    /// Create a store pre-loaded with documents. Non-object values are
    /// rejected.
    pub async fn with_documents(
        seed: impl IntoIterator<Item = (Collection, Vec<Value>)>,
    ) -> Result<Self> {
        let store = Self::new();
        for (collection, docs) in seed {
            for doc in docs {
                match doc {
                    Value::Object(map) => store.insert(collection, map).await?,
                    other => {
                        return Err(StoreError::conversion(
                            collection,
                            format!("expected an object, got {other}"),
                        )
                        .into())
                    }
                }
            }
        }
        Ok(store)
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed.load(AtomicOrdering::Acquire) {
            Err(StoreError::Closed)
        } else {
            Ok(())
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Predicate evaluation
// ---------------------------------------------------------------------------

/// Evaluate `predicate` against a document
pub(crate) fn matches(predicate: &Predicate, doc: &Document) -> bool {
    match predicate {
        Predicate::All => true,
        Predicate::Eq { field, value } => match doc.get(field) {
            Some(found @ Value::Array(items)) => {
                items.iter().any(|item| values_equal(item, value)) || found == value
            }
            Some(found) => values_equal(found, value),
            None => value.is_null(),
        },
        Predicate::ContainsText { field, needle } => {
            let needle = needle.to_lowercase();
            match doc.get(field) {
                Some(Value::String(s)) => s.to_lowercase().contains(&needle),
                Some(Value::Array(items)) => items.iter().any(|item| {
                    item.as_str()
                        .is_some_and(|s| s.to_lowercase().contains(&needle))
                }),
                _ => false,
            }
        }
        Predicate::Range { field, min, max } => match doc.get(field).and_then(Value::as_f64) {
            Some(n) => {
                min.map_or(true, |min| n >= min as f64) && max.map_or(true, |max| n <= max as f64)
            }
            None => false,
        },
        Predicate::Exists { field, exists } => doc.contains_key(field) == *exists,
        Predicate::And(terms) => terms.iter().all(|t| matches(t, doc)),
        Predicate::Or(terms) => terms.iter().any(|t| matches(t, doc)),
    }
}

/// Equality where numbers compare by value across integer and float forms
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// BSON comparison order between value types (missing sorts with null)
fn type_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Number(_)) => 1,
        Some(Value::String(_)) => 2,
        Some(Value::Object(_)) => 3,
        Some(Value::Array(_)) => 4,
        Some(Value::Bool(_)) => 5,
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn compare_documents(a: &Document, b: &Document, sort: &SortSpec) -> Ordering {
    let primary = compare_values(a.get(&sort.field), b.get(&sort.field));
    let primary = match sort.order {
        SortOrder::Asc => primary,
        SortOrder::Desc => primary.reverse(),
    };
    if sort.needs_tiebreak() {
        primary.then_with(|| compare_values(a.get(ID_FIELD), b.get(ID_FIELD)))
    } else {
        primary
    }
}

fn id_of(doc: &Document) -> Option<i64> {
    let id = doc.get(ID_FIELD)?;
    id.as_i64().or_else(|| {
        id.as_f64()
            .filter(|n| n.fract() == 0.0)
            .map(|n| n as i64)
    })
}

/// Values a document contributes to an unwound group
fn unwind(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(other) => vec![other],
    }
}

// ---------------------------------------------------------------------------
// DocumentStore implementation
// ---------------------------------------------------------------------------

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn health_check(&self) -> Result<bool> {
        Ok(!self.closed.load(AtomicOrdering::Acquire))
    }

    async fn count(&self, collection: Collection, filter: &Predicate) -> Result<u64> {
        self.ensure_open()?;
        let documents = self.documents.read().await;
        let count = documents
            .get(&collection)
            .map(|docs| docs.iter().filter(|d| matches(filter, d)).count())
            .unwrap_or(0);
        Ok(count as u64)
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Predicate,
        sort: &SortSpec,
        skip: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Value>> {
        self.ensure_open()?;
        let documents = self.documents.read().await;
        let mut found: Vec<&Document> = documents
            .get(&collection)
            .map(|docs| docs.iter().filter(|d| matches(filter, d)).collect())
            .unwrap_or_default();
        found.sort_by(|a, b| compare_documents(a, b, sort));

        let take = limit.map_or(usize::MAX, |l| l as usize);
        Ok(found
            .into_iter()
            .skip(skip as usize)
            .take(take)
            .map(|d| Value::Object(d.clone()))
            .collect())
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Predicate,
    ) -> Result<Option<Value>> {
        self.ensure_open()?;
        let documents = self.documents.read().await;
        Ok(documents
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| matches(filter, d)))
            .map(|d| Value::Object(d.clone())))
    }

    async fn insert(&self, collection: Collection, mut document: Document) -> Result<()> {
        self.ensure_open()?;
        document.remove("_id");
        let mut documents = self.documents.write().await;
        let docs = documents.entry(collection).or_default();
        if let Some(id) = id_of(&document) {
            if docs.iter().any(|d| id_of(d) == Some(id)) {
                return Err(StoreError::DuplicateId { collection, id }.into());
            }
        }
        docs.push(document);
        Ok(())
    }

    async fn set_fields(
        &self,
        collection: Collection,
        id: i64,
        fields: Document,
    ) -> Result<bool> {
        self.ensure_open()?;
        let mut documents = self.documents.write().await;
        let Some(doc) = documents
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|d| id_of(d) == Some(id)))
        else {
            return Ok(false);
        };
        for (key, value) in fields {
            doc.insert(key, value);
        }
        Ok(true)
    }

    async fn delete(&self, collection: Collection, id: i64) -> Result<bool> {
        self.ensure_open()?;
        let mut documents = self.documents.write().await;
        let Some(docs) = documents.get_mut(&collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|d| id_of(d) != Some(id));
        Ok(docs.len() < before)
    }

    async fn next_id(&self, collection: Collection) -> Result<i64> {
        self.ensure_open()?;
        let mut counters = self.counters.write().await;
        let documents = self.documents.read().await;
        let max_stored = documents
            .get(&collection)
            .and_then(|docs| docs.iter().filter_map(id_of).max())
            .unwrap_or(0);
        let counter = counters.entry(collection).or_insert(0);
        *counter = (*counter).max(max_stored) + 1;
        Ok(*counter)
    }

    async fn distinct(&self, collection: Collection, field: &str) -> Result<Vec<Value>> {
        self.ensure_open()?;
        let documents = self.documents.read().await;
        let mut values: Vec<Value> = Vec::new();
        for doc in documents.get(&collection).into_iter().flatten() {
            for value in unwind(doc.get(field)) {
                if !values.contains(value) {
                    values.push(value.clone());
                }
            }
        }
        Ok(values)
    }

    async fn group_count(&self, collection: Collection, spec: &FacetSpec) -> Result<Vec<Facet>> {
        self.ensure_open()?;
        let documents = self.documents.read().await;
        let mut counts: HashMap<String, u64> = HashMap::new();
        for doc in documents.get(&collection).into_iter().flatten() {
            let keys = if spec.unwind {
                unwind(doc.get(&spec.field))
            } else {
                doc.get(&spec.field).into_iter().collect()
            };
            for key in keys.into_iter().filter_map(facet_key) {
                *counts.entry(key).or_insert(0) += 1;
            }
        }
        let facets = counts
            .into_iter()
            .map(|(name, count)| Facet { name, count })
            .collect();
        Ok(rank_facets(facets, spec.limit))
    }

    async fn sum(&self, collection: Collection, filter: &Predicate, field: &str) -> Result<f64> {
        self.ensure_open()?;
        let documents = self.documents.read().await;
        Ok(documents
            .get(&collection)
            .into_iter()
            .flatten()
            .filter(|d| matches(filter, d))
            .filter_map(|d| d.get(field).and_then(Value::as_f64))
            .fold(0.0, |total, n| total + n))
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, AtomicOrdering::Release);
        tracing::debug!("In-memory store closed");
        Ok(())
    }
}
