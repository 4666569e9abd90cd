use crate::models::HealthResponse;
use axum::Json;

/// GET /actuator/health handler - Health check endpoint
///
/// There is no database or downstream dependency to probe, so the
/// endpoint unconditionally reports the service as up. Liveness probes
/// only need the process to be accepting requests.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "UP" })
}
