//! Error handling
//!
//! Every failure while serving a prediction reaches the client the same
//! way: status 400 and `{"error": "<message>"}`. The variants exist so
//! logs can tell bad input apart from a broken model.

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::features::InputError;
use crate::model::ModelError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or non-numeric request field
    #[error("{0}")]
    Input(String),

    /// Model artifact missing or unreadable
    #[error("{0}")]
    Artifact(String),

    /// Model evaluation failed
    #[error("{0}")]
    Inference(String),

    /// Failure outside the prediction pipeline
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Input(_) => "input",
            AppError::Artifact(_) => "artifact",
            AppError::Inference(_) => "inference",
            AppError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let (status, error_message) = match &self {
            AppError::Input(msg) => {
                tracing::warn!(kind, "Rejected prediction input: {}", msg);
                (StatusCode::BAD_REQUEST, msg.as_str())
            }
            AppError::Artifact(msg) | AppError::Inference(msg) => {
                tracing::error!(kind, "Prediction failed: {}", msg);
                (StatusCode::BAD_REQUEST, msg.as_str())
            }
            AppError::Internal(msg) => {
                tracing::error!(kind, "Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<InputError> for AppError {
    fn from(err: InputError) -> Self {
        AppError::Input(err.to_string())
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Artifact(msg) => AppError::Artifact(msg),
            ModelError::Inference(msg) => AppError::Inference(msg),
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(err.to_string())
    }
}
