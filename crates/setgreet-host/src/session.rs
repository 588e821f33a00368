//! Line-oriented method channel driven by the harness.
//!
//! Each input line carries one JSON method call, optionally addressed to a
//! named channel:
//!
//! ```json
//! {"channel":"setgreet","method":"trackEvent","arguments":{"eventName":"open"}}
//! ```
//!
//! Every non-blank line is answered with exactly one envelope line. A line
//! that does not parse is answered with an `INVALID_ARGUMENT` envelope and the
//! session carries on.

use std::io::{BufRead, Write};

use serde::Deserialize;
use tracing::{debug, warn};

use setgreet_bridge::{Envelope, ErrorCode, MethodCall, MethodCallHandler};

use crate::errors::HostError;

const SESSION_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::session");

/// Request line accepted by the harness.
#[derive(Debug, Deserialize)]
struct HostRequest {
    /// Channel the call is addressed to; the handler's own channel if omitted.
    #[serde(default)]
    channel: Option<String>,
    #[serde(flatten)]
    call: MethodCall,
}

/// Counts of envelopes written during a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Envelopes written.
    pub handled: usize,
    /// Error envelopes among them.
    pub failed: usize,
    /// Not-implemented envelopes among them.
    pub unimplemented: usize,
}

impl SessionSummary {
    fn record(&mut self, envelope: &Envelope) {
        self.handled += 1;
        match envelope {
            Envelope::Success { .. } => {}
            Envelope::Error { .. } => self.failed += 1,
            Envelope::NotImplemented => self.unimplemented += 1,
        }
    }
}

/// Writer that frames envelopes as JSON lines.
pub struct EnvelopeWriter<W> {
    writer: W,
}

impl<W: Write> EnvelopeWriter<W> {
    /// Creates a writer wrapping the given output stream.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes one envelope line and flushes it.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, writing, or flushing fails.
    pub fn write_envelope(&mut self, envelope: &Envelope) -> Result<(), HostError> {
        serde_json::to_writer(&mut self.writer, envelope)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Answers every request line from `input` on `output` until end of input.
///
/// Lines are framed on `\n` as raw bytes, so a line that is not UTF-8 is
/// answered like any other malformed request.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing an envelope fails.
pub fn serve<R, W>(
    handler: &dyn MethodCallHandler,
    mut input: R,
    output: W,
) -> Result<SessionSummary, HostError>
where
    R: BufRead,
    W: Write,
{
    let mut writer = EnvelopeWriter::new(output);
    let mut summary = SessionSummary::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.trim_ascii().is_empty() {
            continue;
        }
        let envelope = respond(handler, &line);
        summary.record(&envelope);
        writer.write_envelope(&envelope)?;
    }

    Ok(summary)
}

fn respond(handler: &dyn MethodCallHandler, line: &[u8]) -> Envelope {
    let request = match serde_json::from_slice::<HostRequest>(line) {
        Ok(request) => request,
        Err(error) => {
            warn!(target: SESSION_TARGET, %error, "malformed request");
            return Envelope::error(
                ErrorCode::InvalidArgument,
                format!("malformed request: {error}"),
            );
        }
    };

    if let Some(channel) = request.channel.as_deref() {
        if channel != handler.channel() {
            debug!(
                target: SESSION_TARGET,
                channel,
                expected = handler.channel(),
                "call addressed to another channel"
            );
            return Envelope::NotImplemented;
        }
    }

    handler.handle(&request.call)
}
