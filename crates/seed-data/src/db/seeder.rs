//! Catalog seeding.

use std::collections::BTreeSet;
use std::fmt;

use catalog::models::{IndexSpec, PRODUCT_INDEXES, PRODUCTS_COLLECTION, Product};
use thiserror::Error;
use tracing::{debug, info};

use super::store::{ProductStore, StoreError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to insert products")]
    Insert(#[source] StoreError),
    #[error("Failed to create index {index}")]
    CreateIndex { index: String, source: StoreError },
    #[error("Failed to count documents")]
    Count(#[source] StoreError),
    #[error("Failed to read distinct {field} values")]
    Distinct {
        field: &'static str,
        source: StoreError,
    },
}

/// What the collection holds after a seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub database: String,
    pub collection: String,
    /// Documents written by this run.
    pub inserted: usize,
    /// Documents in the collection afterwards, including earlier runs.
    pub total: u64,
    pub categories: BTreeSet<String>,
    pub brands: BTreeSet<String>,
}

fn join(values: &BTreeSet<String>) -> String {
    values.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Database {} initialized with sample products in {}",
            self.database, self.collection
        )?;
        writeln!(f, "Products inserted: {}", self.total)?;
        writeln!(f, "Categories available: [{}]", join(&self.categories))?;
        write!(f, "Brands available: [{}]", join(&self.brands))
    }
}

/// Loads products into a store and declares the collection indexes.
///
/// The store handle is owned by the seeder for the whole run; operations are
/// awaited one after another and never overlap.
pub struct Seeder<S> {
    store: S,
    database: String,
}

impl<S: ProductStore> Seeder<S> {
    /// Creates a seeder writing to `store`, which lives in `database`.
    pub fn new(store: S, database: impl Into<String>) -> Self {
        Self {
            store,
            database: database.into(),
        }
    }

    /// Inserts all products as a single batch.
    ///
    /// Nothing is deduplicated: running twice stores every product twice.
    pub async fn insert_products(&self, products: &[Product]) -> Result<usize, SeedError> {
        info!("Seeding {} products...", products.len());

        let inserted = self
            .store
            .insert_many(products)
            .await
            .map_err(SeedError::Insert)?;

        info!("Seeded {} products", inserted);
        Ok(inserted)
    }

    /// Ensures each index exists, in order. Returns the index names.
    pub async fn create_indexes(&self, indexes: &[IndexSpec]) -> Result<Vec<String>, SeedError> {
        info!("Creating {} indexes...", indexes.len());

        let mut names = Vec::with_capacity(indexes.len());
        for index in indexes {
            let name = self
                .store
                .create_index(index)
                .await
                .map_err(|source| SeedError::CreateIndex {
                    index: index.name(),
                    source,
                })?;
            debug!("  Index {} on {}", name, index.field);
            names.push(name);
        }

        info!("Created {} indexes", names.len());
        Ok(names)
    }

    /// Reads back the document count and the distinct categories and brands.
    ///
    /// Only reads the collection, so `inserted` is left at zero; [`Seeder::run`]
    /// fills it in with the size of the batch it wrote.
    pub async fn report_summary(&self) -> Result<SeedSummary, SeedError> {
        let total = self
            .store
            .count_documents()
            .await
            .map_err(SeedError::Count)?;
        let categories = self.distinct("category").await?;
        let brands = self.distinct("brand").await?;

        Ok(SeedSummary {
            database: self.database.clone(),
            collection: PRODUCTS_COLLECTION.to_string(),
            inserted: 0,
            total,
            categories,
            brands,
        })
    }

    async fn distinct(&self, field: &'static str) -> Result<BTreeSet<String>, SeedError> {
        self.store
            .distinct(field)
            .await
            .map_err(|source| SeedError::Distinct { field, source })
    }

    /// Insert, index, then report.
    pub async fn run(&self, products: &[Product]) -> Result<SeedSummary, SeedError> {
        let inserted = self.insert_products(products).await?;
        self.create_indexes(&PRODUCT_INDEXES).await?;
        let summary = self.report_summary().await?;

        Ok(SeedSummary { inserted, ..summary })
    }

    /// Returns a reference to the store for advanced usage.
    pub fn store(&self) -> &S {
        &self.store
    }
}
