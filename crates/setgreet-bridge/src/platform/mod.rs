//! Native platform faces for the method channel.
//!
//! Android and iOS each register a handler under the same channel name and
//! expose an identical method surface. A [`Face`] pairs one [`Dispatcher`]
//! with its platform tag, so validation and error translation behave the same
//! on either platform; the tag only shows up in telemetry.

mod face;

pub use setgreet_config::Platform;

use crate::dispatch::{Envelope, MethodCall};
use crate::sdk::SetgreetSdk;

pub use self::face::Face;

/// Handler registered on the host's method channel.
pub trait MethodCallHandler: Send + Sync {
    /// Channel name this handler answers on.
    fn channel(&self) -> &str;

    /// Platform hosting the handler.
    fn platform(&self) -> Platform;

    /// Handles one call and returns exactly one envelope.
    fn handle(&self, call: &MethodCall) -> Envelope;
}

/// Builds the face for `platform` around `sdk`.
pub fn face_for<S>(
    platform: Platform,
    sdk: S,
    channel: impl Into<String>,
) -> Box<dyn MethodCallHandler>
where
    S: SetgreetSdk + 'static,
{
    Box::new(Face::with_channel(platform, sdk, channel))
}
