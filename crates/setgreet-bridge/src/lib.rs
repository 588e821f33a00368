//! Command bridge between a host method channel and the Setgreet SDK.
//!
//! The host delivers named calls carrying a loosely-typed argument bag. The
//! bridge validates and coerces those arguments, forwards them as typed calls
//! to a [`SetgreetSdk`] collaborator, and translates the result into a uniform
//! [`Envelope`]: success, a categorised error, or "not implemented".
//!
//! ## Layers
//!
//! - [`payload`]: classifies raw argument entries without ever failing.
//! - [`arguments`]: per-method typed arguments and required-field rules.
//! - [`Operation`]: normalises the identify-user operation string.
//! - [`dispatch`]: routes calls, catches faults, and encodes envelopes.
//! - [`adapter`]: forwards typed calls and re-tags SDK faults.
//! - [`platform`]: the Android and iOS faces sharing one dispatcher.
//!
//! The bridge is stateless between calls. Identity, sessions, and event
//! queues live in the SDK.

pub mod adapter;
pub mod arguments;
pub mod dispatch;
mod errors;
mod operation;
pub mod payload;
pub mod platform;
mod sdk;

pub use dispatch::{CHANNEL_NAME, Dispatcher, Envelope, Method, MethodCall, Outcome};
pub use errors::{BridgeError, ErrorCode};
pub use operation::Operation;
pub use payload::Properties;
pub use platform::{Face, MethodCallHandler, Platform, face_for};
pub use sdk::{SdkConfig, SdkFault, SetgreetSdk};

#[cfg(test)]
mod tests;
