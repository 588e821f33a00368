//! Shared configuration for the Setgreet bridge host.
//!
//! Values are layered by `ortho_config`: built-in defaults, then an optional
//! `.setgreet.toml` file, then `SETGREET_*` environment variables, then
//! command-line flags. The bridge core itself is stateless and never reads
//! this configuration; only the host harness consumes it to pick a platform
//! face, a channel name, and the telemetry sink.

mod defaults;
mod logging;
mod platform;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_CHANNEL, DEFAULT_LOG_FILTER, default_channel_string, default_log_filter,
    default_log_filter_string, default_log_format, default_platform,
};
pub use logging::{LogFormat, LogFormatParseError};
pub use platform::{Platform, PlatformParseError};

/// Resolved host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "SETGREET")]
pub struct Config {
    /// `tracing` filter expression applied to the host subscriber.
    #[serde(default = "default_log_filter_string")]
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format for structured logs.
    #[serde(default = "default_log_format")]
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// Platform face that handles incoming method calls.
    #[serde(default = "default_platform")]
    #[ortho_config(default = default_platform())]
    pub platform: Platform,
    /// Method channel name the face registers under.
    #[serde(default = "default_channel_string")]
    #[ortho_config(default = default_channel_string())]
    pub channel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            platform: default_platform(),
            channel: default_channel_string(),
        }
    }
}

impl Config {
    /// Filter expression for the telemetry subscriber.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Output format for the telemetry subscriber.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Platform face selected for this host.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Channel name the selected face answers on.
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }
}
