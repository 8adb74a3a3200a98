//! 错误类型
//! Upstream failures stay typed until a handler turns them into an HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::proxy::mappers::error_classifier::TransportKind;

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The provider answered with a non-200 status.
    #[error("OpenRouter API error ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("OpenRouter request failed ({}): {source}", .kind.as_str())]
    Transport {
        kind: TransportKind,
        #[source]
        source: reqwest::Error,
    },

    /// 200 OK, but no usable completion text in the body.
    #[error("Malformed OpenRouter response: {0}")]
    MalformedResponse(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("{0}")]
    InvalidInput(String),

    /// An axum extractor refused the body; its status is kept (413, 415, 400...).
    #[error("{message} ({status})")]
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::InvalidInput(message.into())
    }

    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::Rejected {
            status,
            message: message.into(),
        }
    }

    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::InvalidInput(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_request_error", msg.clone())
            }
            ApiError::Rejected { status, message } => {
                (*status, "invalid_request_error", message.clone())
            }
            ApiError::Upstream(UpstreamError::Status { status, .. }) => (
                StatusCode::BAD_GATEWAY,
                "upstream_error",
                format!("Upstream provider returned {}", status),
            ),
            ApiError::Upstream(UpstreamError::Transport { kind, .. }) => {
                let code = if *kind == TransportKind::Timeout {
                    StatusCode::GATEWAY_TIMEOUT
                } else {
                    StatusCode::BAD_GATEWAY
                };
                (code, kind.as_str(), kind.user_message().to_string())
            }
            ApiError::Upstream(UpstreamError::MalformedResponse(_)) => (
                StatusCode::BAD_GATEWAY,
                "upstream_error",
                "Upstream provider returned an unreadable response".to_string(),
            ),
            ApiError::Upstream(UpstreamError::ClientBuild(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Upstream client is misconfigured".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = self.parts();
        if status.is_server_error() {
            // Raw upstream detail goes to the log only
            tracing::error!("{}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }
        (
            status,
            Json(json!({
                "error": {
                    "type": kind,
                    "message": message,
                }
            })),
        )
            .into_response()
    }
}
