//! HTTP transport layer
//!
//! Provides the external routing surface: the `/rpc` JSON-RPC endpoint and
//! the health probe.

pub mod handlers;
