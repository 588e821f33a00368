//! Platform face selection.
//!
//! The bridge ships two native faces that expose the same channel contract.
//! Hosts pick the face they embed; the harness reads it from configuration.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Native platform hosting the method channel.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Platform {
    /// Kotlin host wrapping the Android SDK.
    #[default]
    Android,
    /// Swift host wrapping the iOS SDK.
    Ios,
}

impl Platform {
    /// Returns the canonical lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
        }
    }
}

/// Errors encountered while parsing a [`Platform`] from text.
pub type PlatformParseError = strum::ParseError;
