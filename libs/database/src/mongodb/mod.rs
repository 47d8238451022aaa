//! MongoDB connection management
//!
//! Provides configuration, connection setup and a readiness check.

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{connect, connect_from_config};
pub use health::{HealthStatus, check_health_detailed};

pub use mongodb::{Client, Collection, Database};
