//! Zero-capacity rendezvous channels.
//!
//! Every edge of a brick network is one of these. A send blocks until a
//! receiver takes the value and a receive blocks until a sender offers one;
//! nothing is ever buffered in between.
//!
//! # Abandonment
//! A network has no shutdown protocol. When the last peer end of a channel is
//! dropped, any blocked operation on the surviving end fails with [`Closed`],
//! which bricks propagate with `?` and treat as "the network was abandoned".

use crossbeam_channel::{RecvError, SendError, SendTimeoutError};

pub use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

/// Payload of a pure request signal (queue `get`, prompt requests).
pub type Signal = ();

/// Every peer end of a channel has been dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("channel closed: all peer ends were dropped")]
pub struct Closed;

impl<T> From<SendError<T>> for Closed {
    fn from(_: SendError<T>) -> Self {
        Closed
    }
}

impl From<RecvError> for Closed {
    fn from(_: RecvError) -> Self {
        Closed
    }
}

impl<T> From<SendTimeoutError<T>> for Closed {
    fn from(_: SendTimeoutError<T>) -> Self {
        Closed
    }
}

/// Allocates a synchronous channel with no buffering.
///
/// # Example
/// ```
/// let (tx, rx) = pnp_chan::channel::<i64>();
/// let h = std::thread::spawn(move || tx.send(7).unwrap());
/// assert_eq!(rx.recv().unwrap(), 7);
/// h.join().unwrap();
/// ```
#[inline]
pub fn channel<T>() -> (Sender<T>, Receiver<T>) {
    crossbeam_channel::bounded(0)
}

/// Allocates a single-value slot: a channel whose one send never blocks.
///
/// Used for write-once results handed from an auxiliary task back to the
/// task that launched it.
#[inline]
pub(crate) fn slot<T>() -> (Sender<T>, Receiver<T>) {
    crossbeam_channel::bounded(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn send_blocks_without_a_receiver() {
        let (tx, _rx) = channel::<i64>();
        let outcome = tx.send_timeout(1, Duration::from_millis(50));
        assert!(matches!(outcome, Err(SendTimeoutError::Timeout(1))));
    }

    #[test]
    fn rendezvous_hands_over_value() {
        let (tx, rx) = channel::<i64>();
        let h = thread::spawn(move || rx.recv());
        tx.send(42).unwrap();
        assert_eq!(h.join().unwrap(), Ok(42));
    }

    #[test]
    fn dropped_sender_surfaces_as_closed() {
        let (tx, rx) = channel::<i64>();
        drop(tx);
        let err: Closed = rx.recv().unwrap_err().into();
        assert_eq!(err, Closed);
    }

    #[test]
    fn slot_accepts_one_value_without_a_receiver() {
        let (tx, rx) = slot::<i64>();
        tx.send(3).unwrap();
        assert_eq!(rx.try_recv(), Ok(3));
    }
}
