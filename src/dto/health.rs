use serde::Serialize;
use utoipa::ToSchema;

/// Outcome of the storage health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// The data directory is reachable.
    Ok,
    /// The store failed its check; the in-memory league is still served.
    Degraded,
}

/// Health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Storage health.
    pub status: HealthStatus,
}

impl HealthResponse {
    /// Create a health response indicating the store is reachable.
    pub fn ok() -> Self {
        Self {
            status: HealthStatus::Ok,
        }
    }

    /// Create a health response indicating the store failed its health check.
    pub fn degraded() -> Self {
        Self {
            status: HealthStatus::Degraded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let body = serde_json::to_string(&HealthResponse::degraded()).unwrap();
        assert_eq!(body, r#"{"status":"degraded"}"#);
        let body = serde_json::to_string(&HealthResponse::ok()).unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
    }
}
