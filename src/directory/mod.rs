//! Directory operations over investors and startups
//!
//! The managers here turn typed filters, sorts and pagination into store
//! calls and decode the returned documents into records. They never see
//! the transport layer: parameters arrive already validated.

pub mod facets;
pub mod investors;
pub mod startups;
pub mod stats;

pub use investors::InvestorManager;
pub use startups::StartupManager;
pub use stats::{DashboardStats, PlatformStats, StatsComposer, Totals};

use crate::query::{Page, Pagination, Predicate, SortSpec};
use crate::store::{Collection, DocumentStore, StoreError};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Entry point bundling the managers over one shared store
#[derive(Clone)]
pub struct Directory {
    store: Arc<dyn DocumentStore>,
}

impl Directory {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn investors(&self) -> InvestorManager {
        InvestorManager::new(self.store.clone())
    }

    pub fn startups(&self) -> StartupManager {
        StartupManager::new(self.store.clone())
    }

    pub fn stats(&self) -> StatsComposer {
        StatsComposer::new(self.store.clone())
    }

    /// The underlying store (health checks, shutdown)
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Release the store connection
    pub async fn close(&self) -> Result<()> {
        self.store.close().await
    }
}

/// Decode a stored document into a record
pub(crate) fn decode<T: DeserializeOwned>(collection: Collection, document: Value) -> Result<T> {
    serde_json::from_value(document).map_err(|e| StoreError::conversion(collection, e).into())
}

/// Count, then fetch one window in `sort` order.
///
/// The total is computed over the whole filter, so it does not depend on
/// which page was requested; a page past the end comes back empty.
pub(crate) async fn fetch_page<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: Collection,
    filter: &Predicate,
    sort: &SortSpec,
    pagination: Pagination,
) -> Result<Page<T>> {
    let total = store
        .count(collection, filter)
        .await
        .with_context(|| format!("Failed to count {collection}"))?;

    let documents = store
        .find(
            collection,
            filter,
            sort,
            pagination.skip(),
            Some(pagination.limit),
        )
        .await
        .with_context(|| format!("Failed to list {collection}"))?;

    let data = documents
        .into_iter()
        .map(|doc| decode(collection, doc))
        .collect::<Result<Vec<T>>>()?;

    tracing::debug!(
        %collection,
        total,
        page = pagination.page,
        returned = data.len(),
        "Fetched page"
    );
    Ok(pagination.into_page(data, total))
}

/// String values of a distinct listing, sorted alphabetically
pub(crate) fn sorted_strings(values: Vec<Value>) -> Vec<String> {
    let mut strings: Vec<String> = values
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
        .collect();
    strings.sort();
    strings.dedup();
    strings
}
