//! Failure taxonomy reported back across the method channel.
//!
//! Every failure a call can produce is one of five categories. Validation
//! failures are always `InvalidArgument` and never reach the SDK; collaborator
//! faults are re-tagged with the category owned by the method that raised
//! them.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of error categories carried by error envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required argument was missing or blank.
    InvalidArgument,
    /// SDK setup failed.
    InitializationError,
    /// Identifying or resetting the user failed.
    UserError,
    /// Event or screen tracking failed.
    TrackingError,
    /// Presenting a flow failed.
    FlowError,
}

impl ErrorCode {
    /// Returns the wire tag for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::InitializationError => "INITIALIZATION_ERROR",
            Self::UserError => "USER_ERROR",
            Self::TrackingError => "TRACKING_ERROR",
            Self::FlowError => "FLOW_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorised failure produced while handling a method call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// A required argument was missing, mistyped, or blank.
    #[error("{message}")]
    InvalidArgument {
        /// Human-readable description naming the offending field.
        message: String,
    },

    /// The SDK refused to initialise.
    #[error("{message}")]
    Initialization {
        /// Fault description or the method's fallback text.
        message: String,
    },

    /// The SDK failed to identify or reset the user.
    #[error("{message}")]
    User {
        /// Fault description or the method's fallback text.
        message: String,
    },

    /// The SDK failed to record an event or screen view.
    #[error("{message}")]
    Tracking {
        /// Fault description or the method's fallback text.
        message: String,
    },

    /// The SDK failed to present a flow.
    #[error("{message}")]
    Flow {
        /// Fault description or the method's fallback text.
        message: String,
    },
}

impl BridgeError {
    /// Builds an error in the given category.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            ErrorCode::InvalidArgument => Self::InvalidArgument { message },
            ErrorCode::InitializationError => Self::Initialization { message },
            ErrorCode::UserError => Self::User { message },
            ErrorCode::TrackingError => Self::Tracking { message },
            ErrorCode::FlowError => Self::Flow { message },
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Returns the category reported on the wire.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            Self::Initialization { .. } => ErrorCode::InitializationError,
            Self::User { .. } => ErrorCode::UserError,
            Self::Tracking { .. } => ErrorCode::TrackingError,
            Self::Flow { .. } => ErrorCode::FlowError,
        }
    }

    /// Returns the message reported on the wire.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument { message }
            | Self::Initialization { message }
            | Self::User { message }
            | Self::Tracking { message }
            | Self::Flow { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ErrorCode::InvalidArgument, "INVALID_ARGUMENT")]
    #[case(ErrorCode::InitializationError, "INITIALIZATION_ERROR")]
    #[case(ErrorCode::UserError, "USER_ERROR")]
    #[case(ErrorCode::TrackingError, "TRACKING_ERROR")]
    #[case(ErrorCode::FlowError, "FLOW_ERROR")]
    fn code_round_trips_through_constructor(#[case] code: ErrorCode, #[case] tag: &str) {
        let error = BridgeError::new(code, "boom");
        assert_eq!(error.code(), code);
        assert_eq!(error.code().as_str(), tag);
        assert_eq!(error.message(), "boom");
    }

    #[test]
    fn serializes_code_as_wire_tag() {
        let json = serde_json::to_string(&ErrorCode::TrackingError).expect("serialize");
        assert_eq!(json, r#""TRACKING_ERROR""#);
    }

    #[test]
    fn display_is_the_bare_message() {
        let error = BridgeError::invalid_argument("User ID cannot be empty");
        assert_eq!(error.to_string(), "User ID cannot be empty");
    }
}
