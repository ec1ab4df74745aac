//! Product catalog domain crate.
//!
//! Holds the [`models::Product`] document shape, the index declarations for the
//! `products` collection, and the MongoDB connection layer used by the seeding
//! tools.

pub mod config;
pub mod database;
pub mod models;

pub use config::MongoConfig;
pub use database::{Connection, DatabaseError};
