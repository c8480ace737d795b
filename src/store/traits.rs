//! Trait abstraction over the backing document store

use crate::query::{Facet, FacetSpec, Predicate, SortSpec};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;

/// The document collections served by the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Investors,
    Startups,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Investors, Collection::Startups];

    /// Collection name in the store
    pub fn name(self) -> &'static str {
        match self {
            Self::Investors => "investors",
            Self::Startups => "startups",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operations the directory needs from a document store.
///
/// Documents cross this boundary as JSON objects and never carry the
/// store's internal identifier (`_id`). Records are addressed by their
/// integer `id` field.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Check that the store is reachable
    async fn health_check(&self) -> Result<bool>;

    /// Count documents matching `filter`
    async fn count(&self, collection: Collection, filter: &Predicate) -> Result<u64>;

    /// Fetch matching documents in `sort` order, skipping `skip` and taking
    /// at most `limit` (all remaining when `None`)
    async fn find(
        &self,
        collection: Collection,
        filter: &Predicate,
        sort: &SortSpec,
        skip: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Value>>;

    /// Fetch the first matching document
    async fn find_one(&self, collection: Collection, filter: &Predicate)
        -> Result<Option<Value>>;

    /// Insert a new document
    async fn insert(&self, collection: Collection, document: Map<String, Value>) -> Result<()>;

    /// Overwrite the given fields of the document with this `id`, leaving
    /// every other field untouched. Returns whether a document matched.
    async fn set_fields(
        &self,
        collection: Collection,
        id: i64,
        fields: Map<String, Value>,
    ) -> Result<bool>;

    /// Delete the document with this `id`. Returns whether one was removed.
    async fn delete(&self, collection: Collection, id: i64) -> Result<bool>;

    /// Allocate the next record id atomically. Ids are strictly greater than
    /// every id currently stored and every id previously allocated.
    async fn next_id(&self, collection: Collection) -> Result<i64>;

    /// Distinct values of `field`; array fields contribute their elements
    async fn distinct(&self, collection: Collection, field: &str) -> Result<Vec<Value>>;

    /// Group-and-count per `spec`, largest groups first, null/empty keys
    /// excluded
    async fn group_count(&self, collection: Collection, spec: &FacetSpec) -> Result<Vec<Facet>>;

    /// Sum a numeric field over matching documents (0 when none match)
    async fn sum(&self, collection: Collection, filter: &Predicate, field: &str) -> Result<f64>;

    /// Release the connection. The store must not be used afterwards.
    async fn close(&self) -> Result<()>;
}
