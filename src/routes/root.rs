use axum::{response::IntoResponse, Json};
use serde_json::json;

pub async fn greeting() -> impl IntoResponse {
    Json(json!({ "message": "hello guys" }))
}
