//! Axum HTTP handlers
//!
//! `rpc_endpoint` turns a raw body into a JSON-RPC request, delegates to the
//! dispatcher, and writes the envelope back. Bodies that fail to parse or
//! validate never reach the dispatcher; they answer with HTTP 400 directly.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::errors::TransportError;
use crate::rpc::{dispatch::dispatch, protocol::RpcRequest};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn rpc_endpoint(State(state): State<AppState>, body: Bytes) -> Response {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(err) => return TransportError::MalformedBody(err.to_string()).into_response(),
    };

    let request: RpcRequest = match serde_json::from_value(payload) {
        Ok(request) => request,
        Err(err) => return TransportError::InvalidShape(err.to_string()).into_response(),
    };

    let response = dispatch(&state.registry, request).await;
    (StatusCode::OK, Json(response)).into_response()
}
