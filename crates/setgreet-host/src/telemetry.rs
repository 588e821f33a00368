//! Structured logging for the harness.
//!
//! Envelopes own stdout, so every event is written to stderr. The subscriber
//! is installed once per process; that first install announces which face and
//! channel the harness serves and how it logs.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Subscriber, info, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;

use setgreet_config::{Config, LogFormat};

const TELEMETRY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::telemetry");

static INSTALLED: OnceCell<TelemetryHandle> = OnceCell::new();

/// Description of the subscriber installed for this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryHandle {
    format: LogFormat,
    filter: String,
}

impl TelemetryHandle {
    /// Output format of the installed subscriber.
    #[must_use]
    pub const fn format(&self) -> LogFormat {
        self.format
    }

    /// Filter expression the subscriber was built with.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }
}

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured filter expression does not parse.
    #[error("invalid log filter `{expression}`: {message}")]
    Filter {
        /// Expression taken from configuration.
        expression: String,
        /// Parser diagnostic.
        message: String,
    },
    /// Another global subscriber is already installed.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Installs the stderr subscriber described by `config`.
///
/// Only the first call installs anything; later calls return the handle of
/// the subscriber already in place, whatever `config` they pass.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when the configured filter does not
/// parse, or [`TelemetryError::Subscriber`] when a subscriber from elsewhere
/// already owns the global default.
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    INSTALLED
        .get_or_try_init(|| {
            let handle = install(config)?;
            info!(
                target: TELEMETRY_TARGET,
                platform = config.platform().as_str(),
                channel = config.channel(),
                log_format = handle.format().as_str(),
                log_filter = handle.filter(),
                "telemetry ready"
            );
            Ok(handle)
        })
        .cloned()
}

fn parse_filter(expression: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(expression).map_err(|error| TelemetryError::Filter {
        expression: expression.to_owned(),
        message: error.to_string(),
    })
}

fn install(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    let filter = parse_filter(config.log_filter())?;
    let format = config.log_format();

    // JSON lines carry the `method_call` span so each event names its face.
    let subscriber: Box<dyn Subscriber + Send + Sync> = match format {
        LogFormat::Json => Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .with_timer(UtcTime::rfc_3339())
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(false)
                .finish(),
        ),
        LogFormat::Compact => Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(io::stderr().is_terminal())
                .compact()
                .finish(),
        ),
    };

    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)?;
    Ok(TelemetryHandle {
        format,
        filter: config.log_filter().to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::unknown_level("setgreet=loudest")]
    #[case::bad_level_for_target("setgreet_bridge::dispatch=chatty")]
    fn rejects_unparseable_filters(#[case] expression: &str) {
        let error = parse_filter(expression).expect_err("filter should not parse");
        match error {
            TelemetryError::Filter {
                expression: reported,
                ..
            } => assert_eq!(reported, expression),
            TelemetryError::Subscriber(other) => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    #[case("info")]
    #[case("off")]
    #[case("setgreet_bridge::dispatch=debug,warn")]
    fn accepts_target_directives(#[case] expression: &str) {
        assert!(parse_filter(expression).is_ok());
    }

    #[test]
    fn filter_error_names_the_expression() {
        let error = parse_filter("setgreet=loudest").expect_err("filter should not parse");
        assert!(
            error
                .to_string()
                .starts_with("invalid log filter `setgreet=loudest`")
        );
    }
}
