use axum::Json;
use serde_json::{json, Value};

/// Liveness probe with a server timestamp
pub async fn health() -> Json<Value> {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default();

    Json(json!({
        "success": true,
        "message": "Notification API is running",
        "timestamp": timestamp
    }))
}
