//! JSON-RPC 2.0 protocol types and request dispatching
//!
//! Provides the envelope representations, fixed error codes, and the
//! dispatcher mapping each request to a capability invocation outcome.

pub mod dispatch;
pub mod protocol;
