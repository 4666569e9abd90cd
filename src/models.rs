use serde::Serialize;

/// Response type for the health endpoint
///
/// Serializes to `{"status":"UP"}` and nothing else; the status is a
/// process-wide constant, so the payload carries a single key.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
