use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use super::routes::AppState;

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let (status, label) = match state.catalog.check_store().await {
        Ok(()) => (StatusCode::OK, "healthy"),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the store");
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
        }
    };

    (
        status,
        Json(json!({
            "status": label,
            "service": "fitnexus",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        })),
    )
}
