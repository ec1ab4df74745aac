//! Seeding tools for the product catalog.
//!
//! Loads the fixture products into the `products` collection, declares the
//! collection indexes and reports what ended up in the store.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = MongoConfig::from_env();
//! let connection = Connection::connect(&config).await?;
//! let store = MongoStore::new(connection.products(&config.database));
//!
//! let summary = Seeder::new(store, &config.database).run(&fixtures::products()).await?;
//! println!("{summary}");
//! ```

pub mod db;
pub mod fixtures;

pub use catalog::models::{
    IndexDirection, IndexSpec, PRODUCT_INDEXES, PRODUCTS_COLLECTION, Product,
};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::db::{
        MemoryStore, MongoStore, ProductStore, SeedError, SeedSummary, Seeder, StoreError,
        StoreOperation,
    };
    pub use crate::fixtures;
    pub use crate::{PRODUCT_INDEXES, Product};
    pub use catalog::{Connection, MongoConfig};
}
