use mongodb::Client;
use mongodb::bson::doc;
use std::time::Instant;
use tracing::debug;

/// Result of a detailed health check
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Error details when unhealthy
    pub message: Option<String>,
    pub response_time_ms: u64,
}

pub(crate) async fn ping(client: &Client) -> mongodb::error::Result<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
}

/// Check MongoDB connectivity with a `ping` and report timing and error details.
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let started = Instant::now();
    let result = ping(client).await;
    let response_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    debug!(response_time_ms, healthy = result.is_ok(), "MongoDB health check");

    match result {
        Ok(()) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn unreachable_client() -> Client {
        // Nothing listens on port 1; fail fast instead of the 30s default.
        Client::with_uri_str("mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200&connectTimeoutMS=200")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_check_health_detailed_reports_error() {
        let client = unreachable_client().await;
        let status = check_health_detailed(&client).await;

        assert!(!status.healthy);
        assert!(status.message.is_some());
    }
}
