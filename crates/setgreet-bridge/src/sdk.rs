//! Contract consumed from the native Setgreet SDK.
//!
//! The SDK owns identity, sessions, the event queue, and flow rendering. The
//! bridge only forwards validated calls to it and never assumes the SDK
//! serialises concurrent calls.

use std::sync::Arc;

use thiserror::Error;

use crate::operation::Operation;
use crate::payload::Properties;

/// Settings passed to the SDK during initialisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SdkConfig {
    /// Enables verbose SDK-side logging.
    pub debug_mode: bool,
}

/// Fault raised by the SDK while servicing a call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .description.as_deref().unwrap_or("SDK call failed"))]
pub struct SdkFault {
    description: Option<String>,
}

impl SdkFault {
    /// Creates a fault carrying a human-readable description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }

    /// Creates a fault with no description.
    #[must_use]
    pub const fn opaque() -> Self {
        Self { description: None }
    }

    /// Returns the description when one is present and not blank.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|description| !description.trim().is_empty())
    }
}

/// Native SDK operations reachable through the channel.
///
/// Implementations may block on network or UI work; the bridge waits for the
/// call to return before answering the host.
pub trait SetgreetSdk: Send + Sync {
    /// Starts the SDK for the given application key.
    fn initialize(&self, app_key: String, config: SdkConfig) -> Result<(), SdkFault>;

    /// Associates subsequent activity with a user.
    fn identify_user(
        &self,
        user_id: String,
        attributes: Option<Properties>,
        operation: Operation,
        locale: Option<String>,
    ) -> Result<(), SdkFault>;

    /// Forgets the current user.
    fn reset_user(&self) -> Result<(), SdkFault>;

    /// Records a named event.
    fn track_event(&self, event_name: String, properties: Option<Properties>)
    -> Result<(), SdkFault>;

    /// Records a screen view.
    fn track_screen(
        &self,
        screen_name: String,
        properties: Option<Properties>,
    ) -> Result<(), SdkFault>;

    /// Presents the flow with the given identifier.
    fn show_flow(&self, flow_id: String) -> Result<(), SdkFault>;
}

impl<T> SetgreetSdk for Arc<T>
where
    T: SetgreetSdk + ?Sized,
{
    fn initialize(&self, app_key: String, config: SdkConfig) -> Result<(), SdkFault> {
        (**self).initialize(app_key, config)
    }

    fn identify_user(
        &self,
        user_id: String,
        attributes: Option<Properties>,
        operation: Operation,
        locale: Option<String>,
    ) -> Result<(), SdkFault> {
        (**self).identify_user(user_id, attributes, operation, locale)
    }

    fn reset_user(&self) -> Result<(), SdkFault> {
        (**self).reset_user()
    }

    fn track_event(
        &self,
        event_name: String,
        properties: Option<Properties>,
    ) -> Result<(), SdkFault> {
        (**self).track_event(event_name, properties)
    }

    fn track_screen(
        &self,
        screen_name: String,
        properties: Option<Properties>,
    ) -> Result<(), SdkFault> {
        (**self).track_screen(screen_name, properties)
    }

    fn show_flow(&self, flow_id: String) -> Result<(), SdkFault> {
        (**self).show_flow(flow_id)
    }
}
