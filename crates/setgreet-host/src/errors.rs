//! Failures that end a harness run.

use std::io;
use std::sync::Arc;

use ortho_config::OrthoError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

/// Errors that stop the harness.
#[derive(Debug, Error)]
pub enum HostError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {0}")]
    Configuration(#[source] Arc<OrthoError>),

    /// Telemetry initialisation failed.
    #[error("failed to initialise telemetry: {0}")]
    Telemetry(#[source] TelemetryError),

    /// Reading requests or writing envelopes failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Envelope serialisation failed.
    #[error("failed to serialize envelope: {0}")]
    SerializeEnvelope(#[from] serde_json::Error),
}
