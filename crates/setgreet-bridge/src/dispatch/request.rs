//! Method call envelope delivered by the host transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the method channel both platform faces register.
pub const CHANNEL_NAME: &str = "setgreet";

/// A single named call with its loosely-typed arguments.
///
/// The call is built by the transport, handled once, and discarded after
/// its envelope has been produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// Method name, matched byte-for-byte.
    pub method: String,
    /// Argument bag; anything other than an object reads as empty.
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    /// Creates a call with the given method name and arguments.
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Creates a call with no arguments.
    pub fn bare(method: impl Into<String>) -> Self {
        Self::new(method, Value::Null)
    }
}
