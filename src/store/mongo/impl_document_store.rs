//! DocumentStore implementation for MongoStore

use super::client::{document_to_json, MongoStore};
use super::translate;
use crate::query::facet::facet_key;
use crate::query::{Facet, FacetSpec, Predicate, SortSpec};
use crate::store::error::StoreError;
use crate::store::traits::{Collection, DocumentStore};
use anyhow::Result;
use async_trait::async_trait;
use mongodb::bson::doc;
use serde_json::{Map, Value};

#[async_trait]
impl DocumentStore for MongoStore {
    async fn health_check(&self) -> Result<bool> {
        match self.ping().await {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::warn!(error = %e, "MongoDB health check failed");
                Ok(false)
            }
        }
    }

    async fn count(&self, collection: Collection, filter: &Predicate) -> Result<u64> {
        let filter = Self::filter(collection, filter)?;
        tracing::debug!(%collection, ?filter, "count");
        let total = self
            .collection(collection)
            .count_documents(filter)
            .await
            .map_err(StoreError::query(collection, "count"))?;
        Ok(total)
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Predicate,
        sort: &SortSpec,
        skip: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Value>> {
        let filter = Self::filter(collection, filter)?;
        let sort = translate::sort_document(sort);
        tracing::debug!(%collection, ?filter, ?sort, skip, ?limit, "find");

        let coll = self.collection(collection);
        let mut action = coll
            .find(filter)
            .sort(sort)
            .skip(skip)
            .projection(doc! { "_id": 0 });
        if let Some(limit) = limit {
            action = action.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }
        let cursor = action
            .await
            .map_err(StoreError::query(collection, "find"))?;
        Self::collect(collection, cursor, "find").await
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Predicate,
    ) -> Result<Option<Value>> {
        let filter = Self::filter(collection, filter)?;
        let found = self
            .collection(collection)
            .find_one(filter)
            .projection(doc! { "_id": 0 })
            .await
            .map_err(StoreError::query(collection, "find_one"))?;
        Ok(found.map(document_to_json))
    }

    async fn insert(&self, collection: Collection, mut document: Map<String, Value>) -> Result<()> {
        document.remove("_id");
        let document = Self::to_document(collection, &document)?;
        self.collection(collection)
            .insert_one(document)
            .await
            .map_err(StoreError::query(collection, "insert"))?;
        Ok(())
    }

    async fn set_fields(
        &self,
        collection: Collection,
        id: i64,
        fields: Map<String, Value>,
    ) -> Result<bool> {
        // `$set` rejects an empty document
        if fields.is_empty() {
            return Ok(self
                .find_one(collection, &Predicate::equals("id", id))
                .await?
                .is_some());
        }
        let fields = Self::to_document(collection, &fields)?;
        let result = self
            .collection(collection)
            .update_one(doc! { "id": id }, doc! { "$set": fields })
            .await
            .map_err(StoreError::query(collection, "update"))?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, collection: Collection, id: i64) -> Result<bool> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "id": id })
            .await
            .map_err(StoreError::query(collection, "delete"))?;
        Ok(result.deleted_count > 0)
    }

    async fn next_id(&self, collection: Collection) -> Result<i64> {
        self.allocate_id(collection).await
    }

    async fn distinct(&self, collection: Collection, field: &str) -> Result<Vec<Value>> {
        let values = self
            .collection(collection)
            .distinct(field, doc! {})
            .await
            .map_err(StoreError::query(collection, "distinct"))?;
        Ok(values.into_iter().map(translate::to_json).collect())
    }

    async fn group_count(&self, collection: Collection, spec: &FacetSpec) -> Result<Vec<Facet>> {
        let pipeline = translate::facet_pipeline(spec);
        tracing::debug!(%collection, field = %spec.field, "group_count");
        let cursor = self
            .collection(collection)
            .aggregate(pipeline)
            .await
            .map_err(StoreError::query(collection, "aggregate"))?;
        let groups = Self::collect(collection, cursor, "aggregate").await?;

        Ok(groups
            .iter()
            .filter_map(|group| {
                let name = facet_key(group.get("_id")?)?;
                let count = group.get("count")?.as_u64()?;
                Some(Facet::new(name, count))
            })
            .collect())
    }

    async fn sum(&self, collection: Collection, filter: &Predicate, field: &str) -> Result<f64> {
        let pipeline = translate::sum_pipeline(Self::filter(collection, filter)?, field);
        let cursor = self
            .collection(collection)
            .aggregate(pipeline)
            .await
            .map_err(StoreError::query(collection, "aggregate"))?;
        let groups = Self::collect(collection, cursor, "aggregate").await?;

        Ok(groups
            .first()
            .and_then(|group| group.get("total"))
            .and_then(Value::as_f64)
            .unwrap_or(0.0))
    }

    async fn close(&self) -> Result<()> {
        self.shutdown().await;
        Ok(())
    }
}
