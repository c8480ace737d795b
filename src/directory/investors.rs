//! Investor and incubator operations

use super::{decode, fetch_page, sorted_strings};
use crate::models::{
    to_field_map, CreateInvestorRequest, Investor, InvestorKind, UpdateInvestorRequest,
};
use crate::query::{InvestorFilters, Page, Pagination, Predicate, SortSpec};
use crate::store::{Collection, DocumentStore};
use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::Arc;

const COLLECTION: Collection = Collection::Investors;

/// Manager for investor operations
pub struct InvestorManager {
    store: Arc<dyn DocumentStore>,
}

impl InvestorManager {
    /// Create a new investor manager
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    // ========================================================================
    // Records
    // ========================================================================

    /// List investors matching `filters`, one page at a time, in id order
    pub async fn list(
        &self,
        filters: &InvestorFilters,
        pagination: Pagination,
    ) -> Result<Page<Investor>> {
        let filter = filters.to_predicate();
        fetch_page(
            self.store.as_ref(),
            COLLECTION,
            &filter,
            &SortSpec::by_id(),
            pagination,
        )
        .await
    }

    /// Get an investor by id
    pub async fn get(&self, id: i64) -> Result<Option<Investor>> {
        self.store
            .find_one(COLLECTION, &Predicate::equals("id", id))
            .await
            .with_context(|| format!("Failed to get investor {id}"))?
            .map(|doc| decode(COLLECTION, doc))
            .transpose()
    }

    /// Create an investor with the next free id
    pub async fn create(&self, req: CreateInvestorRequest) -> Result<Investor> {
        let mut document = to_field_map(&req)?;
        let id = self.store.next_id(COLLECTION).await?;
        document.insert("id".to_string(), Value::from(id));

        self.store
            .insert(COLLECTION, document.clone())
            .await
            .with_context(|| format!("Failed to create investor {id}"))?;

        let investor: Investor = decode(COLLECTION, Value::Object(document))?;
        tracing::info!(id, name = %investor.name, kind = %investor.kind(), "Created investor");
        Ok(investor)
    }

    /// Apply the supplied fields; `None` when no investor has this id
    pub async fn update(&self, id: i64, req: UpdateInvestorRequest) -> Result<Option<Investor>> {
        let fields = to_field_map(&req)?;
        if !fields.is_empty() {
            tracing::debug!(id, fields = ?fields.keys().collect::<Vec<_>>(), "Updating investor");
            let matched = self
                .store
                .set_fields(COLLECTION, id, fields)
                .await
                .with_context(|| format!("Failed to update investor {id}"))?;
            if !matched {
                return Ok(None);
            }
        }
        self.get(id).await
    }

    /// Delete an investor; `false` when no investor has this id
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let deleted = self
            .store
            .delete(COLLECTION, id)
            .await
            .with_context(|| format!("Failed to delete investor {id}"))?;
        if deleted {
            tracing::info!(id, "Deleted investor");
        }
        Ok(deleted)
    }

    /// Every incubator, in id order
    pub async fn list_incubators(&self) -> Result<Vec<Investor>> {
        let documents = self
            .store
            .find(
                COLLECTION,
                &InvestorKind::Incubator.predicate(),
                &SortSpec::by_id(),
                0,
                None,
            )
            .await
            .context("Failed to list incubators")?;
        documents
            .into_iter()
            .map(|doc| decode(COLLECTION, doc))
            .collect()
    }

    // ========================================================================
    // Filter options
    // ========================================================================

    /// Distinct focus industries, alphabetical
    pub async fn industries(&self) -> Result<Vec<String>> {
        self.distinct_strings("focusIndustries").await
    }

    /// Distinct investment stages, alphabetical
    pub async fn stages(&self) -> Result<Vec<String>> {
        self.distinct_strings("investmentStages").await
    }

    /// Distinct locations, alphabetical
    pub async fn locations(&self) -> Result<Vec<String>> {
        self.distinct_strings("location").await
    }

    async fn distinct_strings(&self, field: &str) -> Result<Vec<String>> {
        let values = self
            .store
            .distinct(COLLECTION, field)
            .await
            .with_context(|| format!("Failed to list distinct investor {field}"))?;
        Ok(sorted_strings(values))
    }
}
