use mongodb::{Client, bson::doc};

use crate::common::{DatabaseError, DatabaseResult};

/// Send a `ping` to the `admin` database.
pub async fn ping(client: &Client) -> DatabaseResult<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}

/// Readiness probe: `Ok` when the server answers a ping.
///
/// The error is stringified so it can feed `axum_helpers::run_health_checks`.
pub async fn check_health(client: &Client) -> Result<(), String> {
    ping(client).await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_check_health() {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        assert!(check_health(&client).await.is_ok());
    }
}
