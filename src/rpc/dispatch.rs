//! Request dispatching: version check, registry lookup, handler invocation
//!
//! Everything past shape validation answers with a JSON-RPC envelope; handler
//! failures are absorbed here and mapped to code -32000.

use tracing::{debug, warn};

use crate::registry::Registry;
use crate::rpc::protocol::{
    RpcRequest, RpcResponse, INVALID_REQUEST, METHOD_NOT_FOUND, SERVER_ERROR,
};

pub async fn dispatch(registry: &Registry, request: RpcRequest) -> RpcResponse {
    if request.jsonrpc != "2.0" {
        warn!(version = %request.jsonrpc, "rejected unsupported jsonrpc version");
        return RpcResponse::error(request.id, INVALID_REQUEST, "invalid jsonrpc version");
    }

    let Some(handler) = registry.lookup(&request.method) else {
        warn!(method = %request.method, "method not found");
        return RpcResponse::error(request.id, METHOD_NOT_FOUND, "Method not found");
    };

    debug!(method = %request.method, "invoking capability");
    match handler.invoke(request.params_or_default()).await {
        Ok(result) => RpcResponse::success(request.id, result),
        Err(error) => {
            warn!(method = %request.method, error = %error, "capability failed");
            RpcResponse::error(request.id, SERVER_ERROR, format!("Server error: {error}"))
        }
    }
}
