//! Stream endpoints: a finite producer and text sinks.
//!
//! By convention a negative value (`-1`, see [`SENTINEL`]) marks the end of
//! an integer stream. The convention is advisory; only [`producer`] and
//! [`consumer`] honour it.

mod print;
mod source;

pub use print::{CONSOLE_FOOTER, console, consumer, convert_int_str, display};
pub use source::{SENTINEL, producer};

use pnp_chan::Closed;

/// Why a sink stopped before its natural end.
#[derive(Debug, thiserror::Error)]
pub(crate) enum SinkError {
    #[error(transparent)]
    Closed(#[from] Closed),

    #[error("failed to write sink output")]
    Write(#[from] std::io::Error),
}

/// Logs the end of a sink.
fn finish(sink: &str, outcome: Result<(), SinkError>) {
    match outcome {
        Ok(()) => tracing::debug!(sink, "sink finished"),
        Err(SinkError::Closed(_)) => tracing::debug!(sink, "network abandoned, sink exiting"),
        Err(SinkError::Write(error)) => tracing::warn!(sink, %error, "sink output failed"),
    }
}
