//! Health check endpoint
//!
//! Liveness probe; answers independently of the category collection.

use axum::Json;
use serde::Serialize;

/// Health check payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "OK"
    pub status: String,
    /// Human-readable status line
    pub message: String,
}

/// /health - Report that the API is running
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "API Running".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await;
        assert_eq!(
            serde_json::to_value(&response.0).unwrap(),
            serde_json::json!({"status": "OK", "message": "API Running"})
        );
    }
}
