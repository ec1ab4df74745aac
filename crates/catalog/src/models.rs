use std::collections::BTreeMap;

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// Collection holding all product documents.
pub const PRODUCTS_COLLECTION: &str = "products";

/// Database the catalog lives in unless overridden by configuration.
pub const DEFAULT_DATABASE: &str = "products_db";

/// A catalog product as stored in the `products` collection.
///
/// `specs` is schema-free: smartphones and laptops carry different attribute
/// keys, so it is kept as an open string map rather than a fixed struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub image_url: String,
    pub description: String,
    pub category: String,
    pub rating: f64,
    #[serde(default)]
    pub specs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexDirection {
    Ascending,
    Descending,
}

impl IndexDirection {
    /// Key value used in an index specification document.
    pub fn as_i32(&self) -> i32 {
        match self {
            IndexDirection::Ascending => 1,
            IndexDirection::Descending => -1,
        }
    }
}

/// A single-field index declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexSpec {
    pub field: &'static str,
    pub direction: IndexDirection,
}

impl IndexSpec {
    pub const fn ascending(field: &'static str) -> Self {
        Self {
            field,
            direction: IndexDirection::Ascending,
        }
    }

    /// Key document, e.g. `{ "price": 1 }`.
    pub fn keys(&self) -> Document {
        let mut keys = Document::new();
        keys.insert(self.field, self.direction.as_i32());
        keys
    }

    /// Name the server assigns when no explicit name is given (`price_1`).
    pub fn name(&self) -> String {
        format!("{}_{}", self.field, self.direction.as_i32())
    }
}

/// Indexes maintained on the `products` collection.
pub const PRODUCT_INDEXES: [IndexSpec; 4] = [
    IndexSpec::ascending("name"),
    IndexSpec::ascending("brand"),
    IndexSpec::ascending("category"),
    IndexSpec::ascending("price"),
];
