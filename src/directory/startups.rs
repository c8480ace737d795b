//! Startup operations

use super::{decode, facets, fetch_page, sorted_strings};
use crate::models::{
    to_field_map, CreateStartupRequest, Startup, UpdateStartupRequest, JUST_CREATED,
};
use crate::query::{Facet, FacetSpec, Page, Pagination, Predicate, StartupFilters, StartupSort};
use crate::store::{Collection, DocumentStore};
use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::Arc;

const COLLECTION: Collection = Collection::Startups;

/// Manager for startup operations
pub struct StartupManager {
    store: Arc<dyn DocumentStore>,
}

impl StartupManager {
    /// Create a new startup manager
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    // ========================================================================
    // Records
    // ========================================================================

    /// List startups matching `filters` in `sort` order, one page at a time
    pub async fn list(
        &self,
        filters: &StartupFilters,
        sort: &StartupSort,
        pagination: Pagination,
    ) -> Result<Page<Startup>> {
        let filter = filters.to_predicate();
        fetch_page(
            self.store.as_ref(),
            COLLECTION,
            &filter,
            &sort.to_spec(),
            pagination,
        )
        .await
    }

    /// Get a startup by id
    pub async fn get(&self, id: i64) -> Result<Option<Startup>> {
        self.store
            .find_one(COLLECTION, &Predicate::equals("id", id))
            .await
            .with_context(|| format!("Failed to get startup {id}"))?
            .map(|doc| decode(COLLECTION, doc))
            .transpose()
    }

    /// Create a startup with the next free id, marked as just active
    pub async fn create(&self, req: CreateStartupRequest) -> Result<Startup> {
        let mut document = to_field_map(&req)?;
        let id = self.store.next_id(COLLECTION).await?;
        document.insert("id".to_string(), Value::from(id));
        document.insert("lastActive".to_string(), Value::from(JUST_CREATED));

        self.store
            .insert(COLLECTION, document.clone())
            .await
            .with_context(|| format!("Failed to create startup {id}"))?;

        let startup: Startup = decode(COLLECTION, Value::Object(document))?;
        tracing::info!(id, name = %startup.name, "Created startup");
        Ok(startup)
    }

    /// Apply the supplied fields; `None` when no startup has this id
    pub async fn update(&self, id: i64, req: UpdateStartupRequest) -> Result<Option<Startup>> {
        let fields = to_field_map(&req)?;
        if !fields.is_empty() {
            tracing::debug!(id, fields = ?fields.keys().collect::<Vec<_>>(), "Updating startup");
            let matched = self
                .store
                .set_fields(COLLECTION, id, fields)
                .await
                .with_context(|| format!("Failed to update startup {id}"))?;
            if !matched {
                return Ok(None);
            }
        }
        self.get(id).await
    }

    /// Delete a startup; `false` when no startup has this id
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let deleted = self
            .store
            .delete(COLLECTION, id)
            .await
            .with_context(|| format!("Failed to delete startup {id}"))?;
        if deleted {
            tracing::info!(id, "Deleted startup");
        }
        Ok(deleted)
    }

    // ========================================================================
    // Facets
    // ========================================================================

    pub async fn industries(&self) -> Result<Vec<Facet>> {
        self.facet(facets::startup_industries()).await
    }

    pub async fn funding_stages(&self) -> Result<Vec<Facet>> {
        self.facet(facets::startup_funding_stages()).await
    }

    pub async fn categories(&self) -> Result<Vec<Facet>> {
        self.facet(facets::startup_categories()).await
    }

    pub async fn tags(&self) -> Result<Vec<Facet>> {
        self.facet(facets::startup_tags()).await
    }

    /// Distinct locations, alphabetical
    pub async fn locations(&self) -> Result<Vec<String>> {
        let values = self
            .store
            .distinct(COLLECTION, "location")
            .await
            .context("Failed to list distinct startup locations")?;
        Ok(sorted_strings(values))
    }

    async fn facet(&self, spec: FacetSpec) -> Result<Vec<Facet>> {
        self.store
            .group_count(COLLECTION, &spec)
            .await
            .with_context(|| format!("Failed to count startups by {}", spec.field))
    }
}
