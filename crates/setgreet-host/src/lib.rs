//! Development harness for the Setgreet method channel.
//!
//! The harness stands in for a host application: it loads configuration,
//! installs telemetry, builds the configured platform face around a
//! logging-only SDK, and answers JSON method calls read line by line. It lets
//! scripts and integration tests exercise the bridge without a native host.

mod errors;
mod session;
pub mod telemetry;
mod tracing_sdk;

use std::io::{BufRead, Write};
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use tracing::info;

use setgreet_bridge::face_for;
use setgreet_config::Config;

pub use errors::HostError;
pub use session::{EnvelopeWriter, SessionSummary, serve};
pub use tracing_sdk::TracingSdk;

const HOST_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::host");

/// Trait abstracting configuration loading for testability.
pub trait ConfigLoader {
    /// Loads the host configuration.
    ///
    /// # Errors
    ///
    /// Returns the loader's error when no valid configuration can be built.
    fn load(&self) -> Result<Config, Arc<OrthoError>>;
}

/// Loader that delegates to [`Config::load`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConfigLoader;

impl ConfigLoader for SystemConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load()
    }
}

/// Loader returning a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    /// Creates a loader that always yields `config`.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(self.config.clone())
    }
}

/// Boots the harness and serves `input` until it is exhausted.
///
/// # Errors
///
/// Returns [`HostError`] when configuration, telemetry, or the channel IO
/// fails. Individual call failures are reported as envelopes, not errors.
pub fn run_with<R, W>(
    loader: &dyn ConfigLoader,
    input: R,
    output: W,
) -> Result<SessionSummary, HostError>
where
    R: BufRead,
    W: Write,
{
    let config = loader.load().map_err(HostError::Configuration)?;
    telemetry::initialise(&config).map_err(HostError::Telemetry)?;

    let face = face_for(config.platform(), TracingSdk, config.channel());
    info!(
        target: HOST_TARGET,
        platform = face.platform().as_str(),
        channel = face.channel(),
        "serving method channel"
    );

    let summary = serve(face.as_ref(), input, output)?;

    info!(
        target: HOST_TARGET,
        handled = summary.handled,
        failed = summary.failed,
        unimplemented = summary.unimplemented,
        "input closed"
    );
    Ok(summary)
}
