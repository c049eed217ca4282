// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

const UPSTREAM_BODY_LIMIT: usize = 1000;

#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request input; no upstream call was made.
    #[error("{0}")]
    Validation(String),

    /// Could not reach the upstream at all (connect error, timeout).
    #[error("could not reach upstream: {0}")]
    UpstreamUnreachable(String),

    /// Upstream rejected the forwarded credential.
    #[error("upstream rejected the api key (status {status})")]
    UpstreamAuth { status: u16 },

    /// Upstream answered with a non-success status.
    #[error("upstream execution failed (status {status})")]
    UpstreamExecution { status: u16, body: String },
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::UpstreamUnreachable(_) => "upstream_unreachable",
            AppError::UpstreamAuth { .. } => "upstream_auth",
            AppError::UpstreamExecution { .. } => "upstream_execution",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamUnreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::UpstreamAuth { .. } => StatusCode::UNAUTHORIZED,
            AppError::UpstreamExecution { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    fn upstream_status(&self) -> Option<u16> {
        match self {
            AppError::UpstreamAuth { status } | AppError::UpstreamExecution { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "error": self.to_string(),
            "kind": self.kind(),
            "upstream_status": self.upstream_status(),
        });
        if let AppError::UpstreamExecution { body: upstream_body, .. } = &self {
            body["upstream_body"] = json!(truncate(upstream_body, UPSTREAM_BODY_LIMIT));
        }
        (self.status_code(), Json(body)).into_response()
    }
}

/// Cut a diagnostic string down to `max` bytes on a char boundary.
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
