use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "Auto README Generator API";

/// GET /health
/// Returns a simple status object with service name and version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /
/// Lists the available endpoints.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": SERVICE_NAME,
        "endpoints": {
            "health": "/health",
            "generate": "/generate-readme (POST)"
        }
    }))
}
