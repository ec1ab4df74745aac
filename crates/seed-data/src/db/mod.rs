//! Database integration for seeding the catalog.
//!
//! The [`Seeder`] drives a [`ProductStore`]: [`MongoStore`] for a live
//! deployment, [`MemoryStore`] for tests.

mod memory;
mod seeder;
mod store;

pub use memory::{MemoryStore, StoreOperation};
pub use seeder::{SeedError, SeedSummary, Seeder};
pub use store::{MongoStore, ProductStore, StoreError};
