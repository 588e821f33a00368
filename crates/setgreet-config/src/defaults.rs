//! Built-in configuration values used when no layer overrides them.

use crate::logging::LogFormat;
use crate::platform::Platform;

/// Method channel name registered by both platform faces.
pub const DEFAULT_CHANNEL: &str = "setgreet";

/// Default log filter expression used by the binaries.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default log filter expression used by the binaries.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    String::from(DEFAULT_LOG_FILTER)
}

/// Default logging format for the binaries.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Default platform face for the harness.
#[must_use]
pub const fn default_platform() -> Platform {
    Platform::Android
}

/// Owned channel name used where allocation is required (e.g. serde).
#[must_use]
pub fn default_channel_string() -> String {
    String::from(DEFAULT_CHANNEL)
}
