use axum::{extract::State, response::IntoResponse, Json};
use http::StatusCode;
use serde_json::json;

use crate::{error::Result, AppState};

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn readiness_check(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let database = match &state.db {
        Some(db) => {
            db.check_connection().await?;
            "connected"
        }
        None => "not configured",
    };

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "database": database
        })),
    ))
}
