//! JSON-RPC 2.0 envelope representations
//!
//! A response holds exactly one of `result` or `error`; the enum makes the
//! alternative unrepresentable. The request `id` is echoed back verbatim and
//! serializes as `null` when the caller omitted it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const JSONRPC_VERSION: &str = "2.0";

pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const SERVER_ERROR: i64 = -32000;

#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    /// `null` and absent both collapse to an empty params object at
    /// invocation time.
    #[serde(default)]
    pub params: Option<Map<String, Value>>,
    #[serde(default)]
    pub id: Value,
}

impl RpcRequest {
    pub fn params_or_default(&self) -> Map<String, Value> {
        self.params.clone().unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct RpcErrorBody {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RpcResponse {
    Success {
        jsonrpc: &'static str,
        id: Value,
        result: Value,
    },
    Error {
        jsonrpc: &'static str,
        id: Value,
        error: RpcErrorBody,
    },
}

impl RpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self::Success {
            jsonrpc: JSONRPC_VERSION,
            id,
            result,
        }
    }

    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self::Error {
            jsonrpc: JSONRPC_VERSION,
            id,
            error: RpcErrorBody {
                code,
                message: message.into(),
            },
        }
    }
}
