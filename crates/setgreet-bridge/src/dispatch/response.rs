//! Outcome encoding for the method channel.
//!
//! Handlers produce an [`Outcome`]; the transport receives an [`Envelope`].
//! The envelope serialises as a tagged JSON object so line-oriented hosts can
//! frame it directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{BridgeError, ErrorCode};

/// Result of handling one call, before transport encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The call completed; carries the (usually `null`) result value.
    Success(Value),
    /// The call failed with a categorised error.
    Failure(BridgeError),
    /// No handler exists for the method name.
    Unimplemented,
}

impl Outcome {
    /// Encodes the outcome into its transport envelope.
    #[must_use]
    pub fn encode(self) -> Envelope {
        match self {
            Self::Success(value) => Envelope::Success { value },
            Self::Failure(error) => Envelope::error(error.code(), error.message()),
            Self::Unimplemented => Envelope::NotImplemented,
        }
    }
}

impl From<Outcome> for Envelope {
    fn from(outcome: Outcome) -> Self {
        outcome.encode()
    }
}

/// Response shape understood by the host transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Envelope {
    /// Successful call.
    Success {
        /// Result value; `null` for every current method.
        value: Value,
    },
    /// Failed call.
    Error {
        /// Error category tag.
        code: ErrorCode,
        /// Human-readable message.
        message: String,
        /// Additional details; always `null`.
        details: Value,
    },
    /// The method is not implemented on this channel.
    NotImplemented,
}

impl Envelope {
    /// Creates an error envelope with no details.
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Error {
            code,
            message: message.into(),
            details: Value::Null,
        }
    }

    /// Returns `true` for a success envelope.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the error category when this is an error envelope.
    #[must_use]
    pub const fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Error { code, .. } => Some(*code),
            Self::Success { .. } | Self::NotImplemented => None,
        }
    }
}
