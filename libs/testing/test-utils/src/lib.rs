//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup
//! - `unique_database_name`: isolates tests that share one server
//!
//! Container-backed tests need a running Docker daemon; mark them
//! `#[ignore]` and run with `cargo test -- --ignored`.
//!
//! ```rust,no_run
//! use test_utils::TestMongo;
//!
//! # async fn example() {
//! let mongo = TestMongo::new().await;
//! let db = mongo.database();
//! // Hand `db` to a repository
//! # }
//! ```

mod mongo;

pub use mongo::TestMongo;

/// Database name with a random suffix, e.g. `test_products_0190c6...`
pub fn unique_database_name(prefix: &str) -> String {
    format!("test_{}_{}", prefix, uuid::Uuid::now_v7().simple())
}
