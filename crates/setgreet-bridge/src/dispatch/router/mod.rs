//! Method routing for channel calls.
//!
//! The router maps a method name onto one of the six handlers the channel
//! supports. Unknown names produce the transport's "not implemented" signal
//! rather than an error category. Handler faults, including panics raised by
//! the collaborator, are caught here and reported under the method's own
//! error category so nothing crosses the channel unconverted.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;
use tracing::{debug, warn};

use crate::adapter::SdkAdapter;
use crate::arguments::{
    IdentifyUserArgs, InitializeArgs, ShowFlowArgs, TrackEventArgs, TrackScreenArgs,
};
use crate::errors::{BridgeError, ErrorCode};
use crate::payload::Payload;
use crate::sdk::SetgreetSdk;

use super::response::Outcome;

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Methods exposed on the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Start the SDK.
    Initialize,
    /// Identify the current user.
    IdentifyUser,
    /// Forget the current user.
    ResetUser,
    /// Record an event.
    TrackEvent,
    /// Record a screen view.
    TrackScreen,
    /// Present a flow.
    ShowFlow,
}

impl Method {
    /// Every routable method.
    pub const ALL: [Self; 6] = [
        Self::Initialize,
        Self::IdentifyUser,
        Self::ResetUser,
        Self::TrackEvent,
        Self::TrackScreen,
        Self::ShowFlow,
    ];

    /// Looks up a method by its exact wire name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == name)
    }

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::IdentifyUser => "identifyUser",
            Self::ResetUser => "resetUser",
            Self::TrackEvent => "trackEvent",
            Self::TrackScreen => "trackScreen",
            Self::ShowFlow => "showFlow",
        }
    }

    /// Category reported when this method's SDK call fails.
    #[must_use]
    pub const fn failure_code(self) -> ErrorCode {
        match self {
            Self::Initialize => ErrorCode::InitializationError,
            Self::IdentifyUser | Self::ResetUser => ErrorCode::UserError,
            Self::TrackEvent | Self::TrackScreen => ErrorCode::TrackingError,
            Self::ShowFlow => ErrorCode::FlowError,
        }
    }

    /// Message used when a failure carries no description.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::Initialize => "Failed to initialize Setgreet SDK",
            Self::IdentifyUser => "Failed to identify user",
            Self::ResetUser => "Failed to reset user",
            Self::TrackEvent => "Failed to track event",
            Self::TrackScreen => "Failed to track screen",
            Self::ShowFlow => "Failed to show flow",
        }
    }

    /// Builds this method's failure from an optional description.
    #[must_use]
    pub fn failure(self, description: Option<&str>) -> BridgeError {
        let message = description.unwrap_or_else(|| self.fallback_message());
        BridgeError::new(self.failure_code(), message)
    }
}

/// Routes calls to handlers backed by a single SDK collaborator.
///
/// The dispatcher keeps no per-call state; concurrent calls share only the
/// collaborator.
#[derive(Debug, Default)]
pub struct Dispatcher<S> {
    sdk: S,
}

impl<S> Dispatcher<S>
where
    S: SetgreetSdk,
{
    /// Creates a dispatcher forwarding to `sdk`.
    pub const fn new(sdk: S) -> Self {
        Self { sdk }
    }

    /// Borrows the collaborator.
    pub const fn sdk(&self) -> &S {
        &self.sdk
    }

    /// Handles one call and returns its outcome.
    ///
    /// Exactly one outcome is produced per call.
    pub fn dispatch(&self, method: &str, arguments: &Value) -> Outcome {
        let Some(route) = Method::parse(method) else {
            debug!(target: DISPATCH_TARGET, method, "method not implemented");
            return Outcome::Unimplemented;
        };

        debug!(target: DISPATCH_TARGET, method = route.as_str(), "dispatching call");
        let payload = Payload::from_value(arguments);
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.invoke(route, &payload)))
            .unwrap_or_else(|panic| Err(route.failure(panic_description(panic.as_ref()))));

        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => {
                warn!(
                    target: DISPATCH_TARGET,
                    method = route.as_str(),
                    code = error.code().as_str(),
                    %error,
                    "call failed"
                );
                Outcome::Failure(error)
            }
        }
    }

    fn invoke(&self, route: Method, payload: &Payload<'_>) -> Result<Value, BridgeError> {
        let adapter = SdkAdapter::new(&self.sdk);
        match route {
            Method::Initialize => adapter.initialize(InitializeArgs::extract(payload)?),
            Method::IdentifyUser => adapter.identify_user(IdentifyUserArgs::extract(payload)?),
            Method::ResetUser => adapter.reset_user(),
            Method::TrackEvent => adapter.track_event(TrackEventArgs::extract(payload)?),
            Method::TrackScreen => adapter.track_screen(TrackScreenArgs::extract(payload)?),
            Method::ShowFlow => adapter.show_flow(ShowFlowArgs::extract(payload)?),
        }
    }
}

/// Extracts a readable message from a panic payload.
fn panic_description(panic: &(dyn Any + Send)) -> Option<&str> {
    panic
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .filter(|message| !message.trim().is_empty())
}
