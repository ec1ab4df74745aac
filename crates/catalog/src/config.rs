//! MongoDB connection settings.

use std::env;
use std::time::Duration;

use crate::models::DEFAULT_DATABASE;

const DEFAULT_URI: &str = "mongodb://localhost:27017";

/// Settings used to open a [`crate::Connection`].
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string, always carrying an `authSource` parameter.
    pub uri: String,
    /// Database the product collection is written to.
    pub database: String,
    /// Client name reported to the server.
    pub app_name: String,
    /// How long to wait for a reachable server before giving up.
    pub server_selection_timeout: Duration,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: with_auth_source(DEFAULT_URI),
            database: DEFAULT_DATABASE.to_string(),
            app_name: "catalog-seed".to_string(),
            server_selection_timeout: Duration::from_secs(5),
        }
    }
}

impl MongoConfig {
    /// Reads `MONGO_URI` and `MONGO_DB_NAME`, falling back to local defaults.
    pub fn from_env() -> Self {
        let uri = env::var("MONGO_URI").unwrap_or_else(|_| DEFAULT_URI.to_string());
        let database =
            env::var("MONGO_DB_NAME").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        Self {
            uri: with_auth_source(&uri),
            database,
            ..Self::default()
        }
    }

    /// Overrides the target database.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }
}

/// Appends `authSource=admin` unless the URI already names an auth source.
///
/// Credentials for the catalog deployment are created in `admin`. The driver
/// rejects options that are not preceded by a `/`, so one is inserted when the
/// URI has no path.
pub fn with_auth_source(uri: &str) -> String {
    if uri.contains("authSource") {
        return uri.to_string();
    }

    let has_path = uri
        .split_once("://")
        .is_some_and(|(_, rest)| rest.contains('/'));

    let separator = if uri.contains('?') {
        "&"
    } else if has_path {
        "?"
    } else {
        "/?"
    };
    format!("{uri}{separator}authSource=admin")
}
