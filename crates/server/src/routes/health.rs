use axum::{Extension, Json};
use serde_json::{json, Value as JsonValue};

use crate::error::AppError;
use crate::store::SessionStore;

/// GET /health
pub async fn health_check(
    Extension(store): Extension<SessionStore>,
) -> Result<Json<JsonValue>, AppError> {
    Ok(Json(json!({
        "status": "ok",
        "sessions": store.count()?,
    })))
}
