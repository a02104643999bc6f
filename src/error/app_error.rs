use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use sqlx::error::ErrorKind;

use crate::models::Envelope;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(sqlx::Error),
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::NotFound(_) => "not_found",
            AppError::Conflict(_) => "conflict",
            AppError::Database(_) | AppError::Config(_) => "infrastructure",
        }
    }

    /// Text that is safe to hand back to a client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) | AppError::Conflict(msg) => {
                msg.clone()
            }
            AppError::Database(_) => "database error".to_string(),
            AppError::Config(_) => "server configuration error".to_string(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("product not found".to_string()),
            sqlx::Error::Database(ref db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation | ErrorKind::ForeignKeyViolation => {
                    tracing::warn!("Constraint conflict: {}", db_err);
                    AppError::Conflict("product conflicts with an existing row".to_string())
                }
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    tracing::warn!("Constraint violation: {}", db_err);
                    AppError::Validation("product violates a table constraint".to_string())
                }
                _ => AppError::Database(err),
            },
            sqlx::Error::Configuration(ref e) => AppError::Config(e.to_string()),
            _ => AppError::Database(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => tracing::error!("Database error: {:?}", e),
            AppError::Config(ref msg) => tracing::error!("Configuration error: {}", msg),
            ref other => tracing::debug!("Request rejected: {}", other),
        }

        let status = self.status();
        let body = Json(Envelope::<()>::failure(self.kind(), self.public_message()));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_distinct_statuses() {
        assert_eq!(
            AppError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Conflict("x".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::Database(sqlx::Error::PoolTimedOut).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn row_not_found_becomes_not_found() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn infrastructure_detail_is_not_public() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind(), "infrastructure");
        assert_eq!(err.public_message(), "database error");

        let err = AppError::Database(sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset by peer at 10.0.0.3",
        )));
        assert!(!err.public_message().contains("10.0.0.3"));

        let err = AppError::Config("DATABASE_URL=postgres://admin:secret@db".into());
        assert_eq!(err.public_message(), "server configuration error");
    }

    #[tokio::test]
    async fn response_body_is_an_error_envelope() {
        let response = AppError::Validation("name must not be blank".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["data"], serde_json::Value::Null);
        assert_eq!(body["error"]["kind"], "validation");
        assert_eq!(body["error"]["message"], "name must not be blank");
    }
}
