//! Typed store failures
//!
//! Stores return `anyhow::Result`; these variants are what ends up inside
//! the `anyhow::Error` so callers can downcast when they need to tell a
//! connection problem from a failed query.

use super::traits::Collection;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to connect to document store at {url}")]
    Connect {
        url: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("{operation} on '{collection}' failed")]
    Query {
        collection: Collection,
        operation: &'static str,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("document in '{collection}' could not be converted: {reason}")]
    Conversion {
        collection: Collection,
        reason: String,
    },

    #[error("document in '{collection}' already uses id {id}")]
    DuplicateId { collection: Collection, id: i64 },

    #[error("document store has been closed")]
    Closed,
}

impl StoreError {
    pub(crate) fn query(
        collection: Collection,
        operation: &'static str,
    ) -> impl FnOnce(mongodb::error::Error) -> Self {
        move |source| Self::Query {
            collection,
            operation,
            source,
        }
    }

    pub(crate) fn conversion(collection: Collection, reason: impl ToString) -> Self {
        Self::Conversion {
            collection,
            reason: reason.to_string(),
        }
    }
}
