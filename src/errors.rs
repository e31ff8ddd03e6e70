use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures that occur before a JSON-RPC request could be constructed.
///
/// These carry no usable request `id`, so they surface as plain HTTP 400
/// responses instead of JSON-RPC error envelopes.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid JSON body: {0}")]
    MalformedBody(String),
    #[error("invalid JSON-RPC request: {0}")]
    InvalidShape(String),
}

impl IntoResponse for TransportError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        tracing::warn!(error = %detail, "rejected request at transport level");
        (StatusCode::BAD_REQUEST, detail).into_response()
    }
}

/// Typed failure value returned by a capability handler.
///
/// The dispatcher maps every variant to JSON-RPC code -32000 with the
/// display message interpolated; a failing handler never escalates into a
/// transport failure.
#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParam { name: &'static str, message: String },
    #[error("{message}")]
    Failed { message: String },
}

impl CapabilityError {
    pub fn invalid_param(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParam {
            name,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}
