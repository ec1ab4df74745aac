//! Integration tests for seeding a live MongoDB.
//!
//! To run these tests, you need a reachable MongoDB and `MONGO_URI` set.
//!
//! Run with: `MONGO_URI=mongodb://... cargo test -p seed-data --test mongo_seed`
//!
//! Each test seeds its own uniquely named database and drops it afterwards.

use std::collections::BTreeSet;
use std::env;

use seed_data::prelude::*;
use uuid::Uuid;

/// Connect to MongoDB, skipping tests if MONGO_URI is not set.
async fn get_test_connection(test_id: &str) -> Option<(Connection, MongoConfig)> {
    if env::var("MONGO_URI").is_err() {
        eprintln!("Skipping test: MONGO_URI not set");
        return None;
    }

    let config = MongoConfig::from_env()
        .with_database(format!("seed_{test_id}_{}", Uuid::new_v4().simple()));

    match Connection::connect(&config).await {
        Ok(connection) => Some((connection, config)),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to MongoDB: {e}");
            None
        }
    }
}

async fn cleanup(connection: Connection, config: &MongoConfig) {
    let _ = connection.select_database(&config.database).drop().await;
    connection.shutdown().await;
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
async fn test_seed_fresh_database() {
    let Some((connection, config)) = get_test_connection("fresh").await else {
        return;
    };

    let seeder = Seeder::new(
        MongoStore::new(connection.products(&config.database)),
        &config.database,
    );
    let summary = seeder.run(&fixtures::products()).await;
    let indexes = seeder.store().index_names().await;

    cleanup(connection, &config).await;

    let summary = summary.expect("seed run failed");
    assert_eq!(summary.inserted, 6);
    assert_eq!(summary.total, 6);
    assert_eq!(summary.categories, set(&["Laptops", "Smartphones"]));
    assert_eq!(summary.brands, set(&["Apple", "Dell", "Google", "Samsung"]));
    assert!(summary.to_string().contains("Products inserted: 6"));

    assert_eq!(
        indexes.expect("listing indexes failed"),
        set(&["brand_1", "category_1", "name_1", "price_1"])
    );
}

#[tokio::test]
async fn test_seed_twice_appends() {
    let Some((connection, config)) = get_test_connection("twice").await else {
        return;
    };

    let seeder = Seeder::new(
        MongoStore::new(connection.products(&config.database)),
        &config.database,
    );
    let products = fixtures::products();
    let first = seeder.run(&products).await;
    let second = seeder.run(&products).await;
    let indexes = seeder.store().index_names().await;

    cleanup(connection, &config).await;

    let first = first.expect("first run failed");
    assert_eq!(first.inserted, 6);
    assert_eq!(first.total, 6);

    let second = second.expect("second run failed");
    assert_eq!(second.inserted, 6);
    assert_eq!(second.total, 12);
    assert_eq!(second.categories, set(&["Laptops", "Smartphones"]));
    assert_eq!(second.brands, set(&["Apple", "Dell", "Google", "Samsung"]));

    assert_eq!(
        indexes.expect("listing indexes failed"),
        set(&["brand_1", "category_1", "name_1", "price_1"])
    );
}
