//! In-process [`ProductStore`] with MongoDB's append and index semantics.

use std::collections::BTreeSet;

use async_trait::async_trait;
use catalog::models::{IndexSpec, Product};
use mongodb::bson::{self, Bson, Document, oid::ObjectId};
use tokio::sync::Mutex;

use super::store::{ProductStore, StoreError};

/// Store operation a [`MemoryStore`] can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Insert,
    CreateIndex,
    Count,
    Distinct,
}

#[derive(Default)]
struct MemoryState {
    documents: Vec<Document>,
    indexes: BTreeSet<String>,
}

/// Keeps documents in memory.
///
/// Every insert appends (each document gets a fresh `_id`, nothing is
/// deduplicated) and creating an index that already exists is a no-op.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
    failing: Option<StoreOperation>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store on which every call of `operation` fails, for exercising
    /// error paths. All other operations behave normally.
    pub fn failing_on(operation: StoreOperation) -> Self {
        Self {
            failing: Some(operation),
            ..Self::default()
        }
    }

    fn check(&self, operation: StoreOperation, target: String) -> Result<(), StoreError> {
        if self.failing == Some(operation) {
            return Err(StoreError::Rejected(target));
        }
        Ok(())
    }

    /// Snapshot of the stored documents.
    pub async fn documents(&self) -> Vec<Document> {
        self.state.lock().await.documents.clone()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn insert_many(&self, products: &[Product]) -> Result<usize, StoreError> {
        self.check(
            StoreOperation::Insert,
            format!("batch of {} products", products.len()),
        )?;

        // Serialize the whole batch before touching state so a bad record
        // leaves the store unchanged.
        let batch = products
            .iter()
            .map(|product| -> Result<Document, StoreError> {
                let mut document = bson::to_document(product)?;
                document.insert("_id", ObjectId::new());
                Ok(document)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut state = self.state.lock().await;
        state.documents.extend(batch);
        Ok(products.len())
    }

    async fn create_index(&self, index: &IndexSpec) -> Result<String, StoreError> {
        let name = index.name();
        self.check(StoreOperation::CreateIndex, format!("index {name}"))?;
        self.state.lock().await.indexes.insert(name.clone());
        Ok(name)
    }

    async fn count_documents(&self) -> Result<u64, StoreError> {
        self.check(StoreOperation::Count, "count".to_string())?;
        Ok(self.state.lock().await.documents.len() as u64)
    }

    async fn distinct(&self, field: &str) -> Result<BTreeSet<String>, StoreError> {
        self.check(StoreOperation::Distinct, format!("distinct {field}"))?;
        let state = self.state.lock().await;

        Ok(state
            .documents
            .iter()
            .filter_map(|document| match document.get(field) {
                Some(Bson::String(s)) => Some(s.clone()),
                _ => None,
            })
            .collect())
    }

    async fn index_names(&self) -> Result<BTreeSet<String>, StoreError> {
        Ok(self.state.lock().await.indexes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[tokio::test]
    async fn test_inserts_append_with_ids() {
        let store = MemoryStore::new();
        let products = fixtures::products();

        store.insert_many(&products).await.unwrap();
        store.insert_many(&products[..1]).await.unwrap();

        let documents = store.documents().await;
        assert_eq!(documents.len(), 7);
        assert!(documents.iter().all(|d| d.get_object_id("_id").is_ok()));

        let ids: std::collections::HashSet<_> = documents
            .iter()
            .map(|d| d.get_object_id("_id").unwrap())
            .collect();
        assert_eq!(ids.len(), 7);
    }

    #[tokio::test]
    async fn test_distinct_ignores_missing_fields() {
        let store = MemoryStore::new();
        store.insert_many(&fixtures::products()).await.unwrap();

        // Embedded documents are not string values
        let specs = store.distinct("specs").await.unwrap();
        assert!(specs.is_empty());

        let missing = store.distinct("colour").await.unwrap();
        assert!(missing.is_empty());
    }

    #[tokio::test]
    async fn test_rejecting_store_keeps_nothing() {
        let store = MemoryStore::failing_on(StoreOperation::Insert);

        let err = store.insert_many(&fixtures::products()).await.unwrap_err();
        assert!(matches!(err, StoreError::Rejected(_)));
        assert_eq!(store.count_documents().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_failure_limited_to_one_operation() {
        let store = MemoryStore::failing_on(StoreOperation::Count);

        store.insert_many(&fixtures::products()).await.unwrap();
        assert!(store.count_documents().await.is_err());
        assert_eq!(store.distinct("brand").await.unwrap().len(), 4);
    }
}
