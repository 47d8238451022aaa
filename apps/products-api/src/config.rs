//! Configuration for Products API

use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mut mongodb = MongoConfig::from_env()?;
        // MONGODB_APP_NAME wins over the package name
        if mongodb.app_name.is_none() {
            mongodb = mongodb.with_app_name(env!("CARGO_PKG_NAME"));
        }
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("MONGODB_URL", Some("mongodb://db:27017")),
                ("MONGODB_DATABASE", Some("catalog")),
                ("MONGODB_APP_NAME", None),
                ("PORT", Some("3003")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.mongodb.database(), "catalog");
                assert_eq!(config.mongodb.app_name.as_deref(), Some("products_api"));
                assert_eq!(config.server.port, 3003);
                assert_eq!(config.app.name, "products_api");
            },
        );
    }

    #[test]
    fn test_config_keeps_mongodb_app_name() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://db:27017")),
                ("MONGODB_DATABASE", Some("catalog")),
                ("MONGODB_APP_NAME", Some("catalog-worker")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.mongodb.app_name.as_deref(), Some("catalog-worker"));
                assert_eq!(config.app.name, "products_api");
            },
        );
    }

    #[test]
    fn test_config_requires_mongodb_url() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", None),
                ("MONGODB_DATABASE", Some("catalog")),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
