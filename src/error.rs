use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Where an offending value was found: `["body", "stock"]`, `["path", "item_id"]`.
pub type Location = Vec<serde_json::Value>;

/// One entry of a 422 `detail` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: Location,
    pub msg: String,
    pub input: serde_json::Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("request validation failed ({} error(s))", .0.len())]
    Validation(Vec<FieldError>),
}

impl AppError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": detail }))).into_response()
            }
            AppError::Validation(errors) => {
                tracing::debug!(count = errors.len(), "Rejected request");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "detail": errors })),
                )
                    .into_response()
            }
        }
    }
}
