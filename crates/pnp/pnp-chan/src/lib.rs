//! Channel plumbing shared by every pnp brick.
//!
//! - [`channel`]: zero-capacity rendezvous channels and the [`Closed`] error
//! - [`Join`] / [`gather`]: counting barrier and concurrent one-shot receives
//! - [`recv_value`] / [`send_value`]: one-shot relays
//! - [`spawn`]: launch a process on its own named thread

mod channel;
mod join;
mod relay;

pub use channel::{Closed, Receiver, RecvTimeoutError, Sender, Signal, channel};
pub use crossbeam_channel::select;
pub use join::{Done, Join, gather};
pub use relay::{recv_value, send_value};

use std::io;
use std::thread::{self, JoinHandle};

/// Launches a process on a dedicated, named thread.
///
/// Processes are never called synchronously: every brick in a network runs
/// concurrently with the others.
///
/// # Errors
/// Fails only if the OS refuses to create the thread.
pub fn spawn<F>(name: &str, process: F) -> io::Result<JoinHandle<()>>
where
    F: FnOnce() + Send + 'static,
{
    thread::Builder::new().name(name.to_owned()).spawn(process)
}

/// Records how a process loop ended.
///
/// Brick loops only end through abandonment; finite processes end with `Ok`.
pub fn settle(process: &str, outcome: Result<(), Closed>) {
    match outcome {
        Ok(()) => tracing::debug!(process, "process finished"),
        Err(Closed) => tracing::debug!(process, "network abandoned, process exiting"),
    }
}
