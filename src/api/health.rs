use chrono::Utc;
use poem_openapi::{Object, OpenApi, Tags, payload::Json};

/// Liveness endpoint for the volunteer service
pub struct HealthApi;

/// Response model for the health probe
#[derive(Object, Debug)]
pub struct HealthStatus {
    /// "up" while the process is serving requests
    pub status: String,

    /// Time the probe was answered (ISO 8601)
    pub timestamp: String,
}

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Service health
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Report service liveness
    ///
    /// Answers without touching the volunteer store, so it only proves the
    /// process is up, not that the database is reachable.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthStatus> {
        Json(HealthStatus {
            status: "up".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
