//! Built-in capabilities installed at startup
//!
//! `ping` echoes its params together with a wall-clock timestamp;
//! `sleep_then_echo` suspends for a caller-chosen delay before echoing,
//! exercising non-blocking handler execution.

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::{errors::CapabilityError, registry::Registry};

pub struct Ping;

#[async_trait::async_trait]
impl crate::registry::Capability for Ping {
    async fn invoke(&self, params: Map<String, Value>) -> Result<Value, CapabilityError> {
        Ok(json!({
            "echo": params,
            "server_time": unix_time_seconds(),
        }))
    }
}

pub struct SleepThenEcho;

#[async_trait::async_trait]
impl crate::registry::Capability for SleepThenEcho {
    async fn invoke(&self, params: Map<String, Value>) -> Result<Value, CapabilityError> {
        let delay = coerce_delay(&params)?;
        // A negative delay sleeps zero but is still echoed as given.
        let wait = Duration::try_from_secs_f64(delay.max(0.0)).map_err(|_| {
            CapabilityError::invalid_param("delay", format!("{delay} seconds is out of range"))
        })?;
        tokio::time::sleep(wait).await;

        Ok(json!({
            "ok": true,
            "delay": delay,
            "received": params,
        }))
    }
}

/// Builds the process-wide registry of built-in capabilities.
pub fn builtin_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register("ping", Arc::new(Ping));
    registry.register("sleep_then_echo", Arc::new(SleepThenEcho));
    registry
}

fn unix_time_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

/// Reads `delay` from params, defaulting to 0.1 when absent. Numbers and
/// numeric strings coerce; anything else fails the invocation.
fn coerce_delay(params: &Map<String, Value>) -> Result<f64, CapabilityError> {
    let Some(raw) = params.get("delay") else {
        return Ok(0.1);
    };

    let delay = match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| {
        CapabilityError::invalid_param("delay", format!("could not coerce {raw} to a number"))
    })?;

    if !delay.is_finite() {
        return Err(CapabilityError::invalid_param(
            "delay",
            "must be a finite number",
        ));
    }

    Ok(delay)
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::registry::Capability;

    use super::*;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().expect("params object").clone()
    }

    #[test]
    fn delay_defaults_when_absent() {
        let delay = coerce_delay(&Map::new()).expect("default should apply");
        assert_eq!(delay, 0.1);
    }

    #[test]
    fn delay_accepts_numbers_and_numeric_strings() {
        let from_number = coerce_delay(&params(json!({"delay": 0.25}))).expect("number coerces");
        assert_eq!(from_number, 0.25);

        let from_string = coerce_delay(&params(json!({"delay": "0.25"}))).expect("string coerces");
        assert_eq!(from_string, 0.25);

        let integer = coerce_delay(&params(json!({"delay": 2}))).expect("integer coerces");
        assert_eq!(integer, 2.0);
    }

    #[test]
    fn delay_rejects_non_coercible_values() {
        let err = coerce_delay(&params(json!({"delay": "not-a-number"})))
            .expect_err("expected coercion failure");
        assert!(err.to_string().contains("delay"));

        let err = coerce_delay(&params(json!({"delay": [1, 2]})))
            .expect_err("expected coercion failure");
        assert!(err.to_string().contains("delay"));

        let err = coerce_delay(&params(json!({"delay": true})))
            .expect_err("expected coercion failure");
        assert!(err.to_string().contains("delay"));
    }

    #[tokio::test]
    async fn sleep_then_echo_rejects_out_of_range_delay() {
        let err = SleepThenEcho
            .invoke(params(json!({"delay": 1e20})))
            .await
            .expect_err("expected out-of-range failure");
        assert!(err.to_string().contains("out of range"));

        let err = SleepThenEcho
            .invoke(params(json!({"delay": "1e20"})))
            .await
            .expect_err("expected out-of-range failure");
        assert!(err.to_string().contains("out of range"));
    }

    #[tokio::test]
    async fn ping_echoes_params_with_timestamp() {
        let supplied = params(json!({"message": "hello", "nested": {"a": 1}}));
        let before = unix_time_seconds();

        let result = Ping.invoke(supplied.clone()).await.expect("ping succeeds");

        assert_eq!(result["echo"], Value::Object(supplied));
        let server_time = result["server_time"].as_f64().expect("numeric timestamp");
        assert!(server_time >= before);
    }

    #[tokio::test]
    async fn sleep_then_echo_waits_and_echoes() {
        let supplied = params(json!({"delay": 0.2}));
        let started_at = Instant::now();

        let result = SleepThenEcho
            .invoke(supplied)
            .await
            .expect("handler succeeds");

        assert!(started_at.elapsed() >= Duration::from_millis(200));
        assert_eq!(
            result,
            json!({"ok": true, "delay": 0.2, "received": {"delay": 0.2}})
        );
    }

    #[tokio::test]
    async fn sleep_then_echo_negative_delay_returns_immediately() {
        let result = SleepThenEcho
            .invoke(params(json!({"delay": -1})))
            .await
            .expect("handler succeeds");

        assert_eq!(result["ok"], json!(true));
        assert_eq!(result["delay"], json!(-1.0));
    }

    #[test]
    fn builtin_registry_installs_both_capabilities() {
        let registry = builtin_registry();
        assert!(registry.lookup("ping").is_some());
        assert!(registry.lookup("sleep_then_echo").is_some());
        assert!(registry.lookup("discover").is_none());
    }
}
