use crate::signaling::SignalingError;
use crate::standup::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

/// Failures surfaced at the HTTP boundary
///
/// Every variant maps to a JSON `{error, details?}` body; nothing propagates
/// as an unhandled fault and nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Malformed JSON posted to the signaling endpoint
    #[error("Invalid JSON in request body")]
    InvalidRequestBody,

    /// Malformed JSON posted to the save endpoint
    #[error("Invalid JSON data")]
    InvalidPayload,

    /// Incomplete `year`/`month`/`day` query
    #[error("Missing date parameters")]
    MissingParameters,

    #[error(transparent)]
    Signaling(#[from] SignalingError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// JSON error body returned to the caller
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidRequestBody
            | ApiError::InvalidPayload
            | ApiError::MissingParameters => StatusCode::BAD_REQUEST,
            ApiError::Signaling(err) => match err {
                SignalingError::MissingOffer => StatusCode::BAD_REQUEST,
                SignalingError::MissingCredential | SignalingError::Transport(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                SignalingError::Upstream { status, .. } => StatusCode::from_u16(*status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            },
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::Signaling(SignalingError::Upstream { detail, .. }) => ErrorBody {
                error: "OpenAI API error".to_string(),
                details: Some(detail.clone()),
            },
            ApiError::Signaling(SignalingError::Transport(err)) => ErrorBody {
                error: "Server error".to_string(),
                details: Some(Value::String(err.to_string())),
            },
            ApiError::Store(StoreError::CorruptRecord { .. }) => ErrorBody {
                error: "Invalid JSON in file".to_string(),
                details: None,
            },
            ApiError::Store(err) => ErrorBody {
                error: "Server error".to_string(),
                details: Some(Value::String(err.to_string())),
            },
            other => ErrorBody {
                error: other.to_string(),
                details: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (status, Json(self.body())).into_response()
    }
}
