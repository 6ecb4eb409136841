//! One-shot relays: a single receive or a single send, then done.

use crate::channel::{Closed, Receiver, Sender};
use crate::join::Done;

/// Receives exactly one value from `input` and writes it into `slot`.
///
/// `slot` must be a write-once channel with room for the value (see
/// [`crate::gather`]); completion is signalled through `done` only after the
/// slot has been filled.
pub fn recv_value<T>(input: &Receiver<T>, slot: &Sender<T>, done: Done) -> Result<(), Closed> {
    let value = input.recv()?;
    slot.send(value)?;
    done.release();
    Ok(())
}

/// Sends `value` on `out` once.
#[inline]
pub fn send_value<T>(value: T, out: &Sender<T>) -> Result<(), Closed> {
    out.send(value)?;
    Ok(())
}
