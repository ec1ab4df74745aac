//! Storage seam for the seeder.

use std::collections::BTreeSet;

use async_trait::async_trait;
use catalog::models::{IndexSpec, Product};
use mongodb::bson::{Bson, doc};
use mongodb::{Collection, IndexModel};
use thiserror::Error;
use tracing::debug;

/// Name of the index every collection carries implicitly.
const ID_INDEX: &str = "_id_";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
    #[error("BSON serialization error")]
    Bson(#[from] mongodb::bson::ser::Error),
    #[error("Write rejected: {0}")]
    Rejected(String),
}

/// The operations the seeder needs from a product collection.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Writes all products in one batch. Returns the number inserted.
    async fn insert_many(&self, products: &[Product]) -> Result<usize, StoreError>;

    /// Ensures the index exists. Returns its name; an existing identical
    /// index is not an error.
    async fn create_index(&self, index: &IndexSpec) -> Result<String, StoreError>;

    /// Total number of documents in the collection.
    async fn count_documents(&self) -> Result<u64, StoreError>;

    /// Deduplicated string values of `field` across the collection.
    async fn distinct(&self, field: &str) -> Result<BTreeSet<String>, StoreError>;

    /// Names of the declared indexes, excluding `_id_`.
    async fn index_names(&self) -> Result<BTreeSet<String>, StoreError>;
}

/// [`ProductStore`] backed by a MongoDB collection.
#[derive(Clone)]
pub struct MongoStore {
    collection: Collection<Product>,
}

impl MongoStore {
    pub fn new(collection: Collection<Product>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl ProductStore for MongoStore {
    async fn insert_many(&self, products: &[Product]) -> Result<usize, StoreError> {
        // The server rejects an empty insert batch
        if products.is_empty() {
            return Ok(0);
        }

        let result = self.collection.insert_many(products).await?;
        Ok(result.inserted_ids.len())
    }

    async fn create_index(&self, index: &IndexSpec) -> Result<String, StoreError> {
        let model = IndexModel::builder().keys(index.keys()).build();
        let result = self.collection.create_index(model).await?;

        debug!("Index {} ready on {}", result.index_name, self.collection.name());
        Ok(result.index_name)
    }

    async fn count_documents(&self) -> Result<u64, StoreError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn distinct(&self, field: &str) -> Result<BTreeSet<String>, StoreError> {
        let values = self.collection.distinct(field, doc! {}).await?;

        Ok(values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(s) => Some(s),
                _ => None,
            })
            .collect())
    }

    async fn index_names(&self) -> Result<BTreeSet<String>, StoreError> {
        let names = self.collection.list_index_names().await?;

        Ok(names.into_iter().filter(|name| name != ID_INDEX).collect())
    }
}
