//! Loosely-typed argument bag delivered with each method call.
//!
//! The host sends arguments as an arbitrary JSON value. Handlers only care
//! about a handful of named fields, each expected to be a string, a boolean,
//! or a nested mapping. Extraction never fails: a missing key, an explicit
//! `null`, or a value of the wrong shape all read as "no value", leaving the
//! validators to decide whether that is acceptable.

use serde_json::{Map, Value};
use tracing::debug;

/// Tracing target for payload extraction.
const PAYLOAD_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::payload");

/// Opaque key/value mapping forwarded to the SDK untouched.
pub type Properties = Map<String, Value>;

/// Shape of a single payload entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    /// A string value.
    Text(&'a str),
    /// A boolean value.
    Flag(bool),
    /// A nested key/value mapping.
    Mapping(&'a Properties),
    /// The key is missing or explicitly `null`.
    Absent,
    /// The key holds some other JSON kind (number or array).
    Mismatched(&'static str),
}

/// Read-only view over a call's arguments.
#[derive(Debug, Clone, Copy)]
pub struct Payload<'a> {
    entries: Option<&'a Properties>,
}

impl<'a> Payload<'a> {
    /// Wraps the raw arguments value.
    ///
    /// Anything other than a JSON object is treated as an empty mapping.
    #[must_use]
    pub fn from_value(arguments: &'a Value) -> Self {
        Self {
            entries: arguments.as_object(),
        }
    }

    /// Classifies the entry stored under `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Field<'a> {
        match self.entries.and_then(|entries| entries.get(name)) {
            None | Some(Value::Null) => Field::Absent,
            Some(Value::String(text)) => Field::Text(text),
            Some(Value::Bool(flag)) => Field::Flag(*flag),
            Some(Value::Object(mapping)) => Field::Mapping(mapping),
            Some(Value::Number(_)) => Field::Mismatched("number"),
            Some(Value::Array(_)) => Field::Mismatched("array"),
        }
    }

    /// Returns the entry as a string when it is one.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&'a str> {
        match self.field(name) {
            Field::Text(text) => Some(text),
            other => unexpected(name, "string", other),
        }
    }

    /// Returns the entry as a boolean when it is one.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.field(name) {
            Field::Flag(flag) => Some(flag),
            other => unexpected(name, "bool", other),
        }
    }

    /// Returns the entry as a mapping when it is one.
    #[must_use]
    pub fn mapping(&self, name: &str) -> Option<&'a Properties> {
        match self.field(name) {
            Field::Mapping(mapping) => Some(mapping),
            other => unexpected(name, "mapping", other),
        }
    }
}

fn unexpected<T>(name: &str, expected: &'static str, found: Field<'_>) -> Option<T> {
    if !matches!(found, Field::Absent) {
        debug!(
            target: PAYLOAD_TARGET,
            field = name,
            expected,
            found = found.kind(),
            "ignoring argument with unexpected type"
        );
    }
    None
}

impl Field<'_> {
    /// Names the JSON kind of this entry for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Flag(_) => "bool",
            Self::Mapping(_) => "mapping",
            Self::Absent => "absent",
            Self::Mismatched(kind) => *kind,
        }
    }
}
