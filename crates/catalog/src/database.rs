use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use thiserror::Error;
use tracing::info;

use crate::config::MongoConfig;
use crate::models::{PRODUCTS_COLLECTION, Product};

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid MongoDB connection options")]
    Options(#[source] mongodb::error::Error),

    #[error("Could not connect to MongoDB")]
    Unreachable(#[source] mongodb::error::Error),
}

/// An open, verified MongoDB client.
///
/// The client is acquired once per run and handed to whoever needs it; call
/// [`Connection::shutdown`] when done so pooled connections are closed.
#[derive(Clone)]
pub struct Connection {
    client: Client,
}

impl Connection {
    /// Builds a client from `config` and pings the server.
    pub async fn connect(config: &MongoConfig) -> Result<Self, DatabaseError> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(DatabaseError::Options)?;
        options.app_name = Some(config.app_name.clone());
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let client = Client::with_options(options).map_err(DatabaseError::Options)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(DatabaseError::Unreachable)?;

        info!("Connected to MongoDB");
        Ok(Self { client })
    }

    /// Binds to the named logical database.
    pub fn select_database(&self, name: &str) -> Database {
        self.client.database(name)
    }

    /// Typed handle to the product collection of the named database.
    pub fn products(&self, database: &str) -> Collection<Product> {
        self.select_database(database)
            .collection::<Product>(PRODUCTS_COLLECTION)
    }

    /// Closes the underlying client.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_connect_unreachable_server() {
        let config = MongoConfig {
            uri: "mongodb://127.0.0.1:1/?directConnection=true".to_string(),
            server_selection_timeout: Duration::from_millis(200),
            ..MongoConfig::default()
        };

        let err = match Connection::connect(&config).await {
            Ok(_) => panic!("connected to a closed port"),
            Err(e) => e,
        };

        assert!(matches!(err, DatabaseError::Unreachable(_)));
        assert_eq!(err.to_string(), "Could not connect to MongoDB");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_uri() {
        let config = MongoConfig {
            uri: "postgres://localhost:5432".to_string(),
            ..MongoConfig::default()
        };

        let err = match Connection::connect(&config).await {
            Ok(_) => panic!("accepted a non-MongoDB URI"),
            Err(e) => e,
        };

        assert!(matches!(err, DatabaseError::Options(_)));
    }
}
