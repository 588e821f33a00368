//! The channel handler shared by both native platforms.

use tracing::info_span;

use crate::dispatch::{CHANNEL_NAME, Dispatcher, Envelope, MethodCall};
use crate::sdk::SetgreetSdk;

use super::{MethodCallHandler, Platform};

/// Tracing target for platform faces.
const PLATFORM_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::platform");

/// One platform's registration on the method channel.
#[derive(Debug)]
pub struct Face<S> {
    platform: Platform,
    channel: String,
    dispatcher: Dispatcher<S>,
}

impl<S> Face<S>
where
    S: SetgreetSdk,
{
    /// Creates the Android face on the default channel.
    pub fn android(sdk: S) -> Self {
        Self::with_channel(Platform::Android, sdk, CHANNEL_NAME)
    }

    /// Creates the iOS face on the default channel.
    pub fn ios(sdk: S) -> Self {
        Self::with_channel(Platform::Ios, sdk, CHANNEL_NAME)
    }

    /// Creates a face for `platform` on a custom channel name.
    pub fn with_channel(platform: Platform, sdk: S, channel: impl Into<String>) -> Self {
        Self {
            platform,
            channel: channel.into(),
            dispatcher: Dispatcher::new(sdk),
        }
    }

    /// Borrows the dispatcher.
    pub const fn dispatcher(&self) -> &Dispatcher<S> {
        &self.dispatcher
    }
}

impl<S> MethodCallHandler for Face<S>
where
    S: SetgreetSdk,
{
    fn channel(&self) -> &str {
        &self.channel
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn handle(&self, call: &MethodCall) -> Envelope {
        let span = info_span!(
            target: PLATFORM_TARGET,
            "method_call",
            platform = self.platform.as_str(),
            channel = self.channel.as_str(),
            method = call.method.as_str()
        );
        let _entered = span.enter();
        self.dispatcher.dispatch(&call.method, &call.arguments).encode()
    }
}
