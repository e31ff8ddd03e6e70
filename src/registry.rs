//! Capability registry: static name-to-handler mapping
//!
//! Built once at startup and only read afterwards, so in-flight requests can
//! look up handlers concurrently without locking.

use std::{collections::HashMap, sync::Arc};

use serde_json::{Map, Value};

use crate::errors::CapabilityError;

/// An asynchronous, named handler invoked with the request `params` object.
///
/// Handlers own no mutable state; every invocation works on its own
/// parameters and produces an independent result.
#[async_trait::async_trait]
pub trait Capability: Send + Sync {
    async fn invoke(&self, params: Map<String, Value>) -> Result<Value, CapabilityError>;
}

#[derive(Default)]
pub struct Registry {
    handlers: HashMap<String, Arc<dyn Capability>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `handler`. Registering an existing name replaces the
    /// previous handler.
    pub fn register(&mut self, name: impl Into<String>, handler: Arc<dyn Capability>) {
        self.handlers.insert(name.into(), handler);
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Capability>> {
        self.handlers.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    struct FixedResult(Value);

    #[async_trait::async_trait]
    impl Capability for FixedResult {
        async fn invoke(&self, _params: Map<String, Value>) -> Result<Value, CapabilityError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn lookup_returns_registered_handler() {
        let mut registry = Registry::new();
        registry.register("answer", Arc::new(FixedResult(json!(42))));

        let handler = registry.lookup("answer").expect("handler should exist");
        let result = handler.invoke(Map::new()).await.expect("handler succeeds");
        assert_eq!(result, json!(42));
    }

    #[test]
    fn lookup_miss_returns_none() {
        let registry = Registry::new();
        assert!(registry.lookup("missing").is_none());
    }

    #[tokio::test]
    async fn last_registration_wins() {
        let mut registry = Registry::new();
        registry.register("answer", Arc::new(FixedResult(json!(1))));
        registry.register("answer", Arc::new(FixedResult(json!(2))));

        let handler = registry.lookup("answer").expect("handler should exist");
        let result = handler.invoke(Map::new()).await.expect("handler succeeds");
        assert_eq!(result, json!(2));
    }
}
