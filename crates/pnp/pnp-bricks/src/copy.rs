//! Fan-out broadcast.
//!
//! # Design
//! The main loop receives a value and hands it to one short-lived send task
//! per destination, then immediately goes back to `input`. It never waits for
//! those sends, so a slow destination makes send tasks pile up without bound.
//!
//! Tasks aimed at the same destination form a chain: each one waits for its
//! predecessor to finish before sending, so every destination still sees the
//! values in broadcast order. Tasks for different destinations are unordered.

use pnp_chan::{Closed, Receiver, Sender, Signal, send_value, settle};
use std::thread;

/// Sends every value received on `input` to both `out1` and `out2`.
pub fn copy2<T>(input: Receiver<T>, out1: Sender<T>, out2: Sender<T>)
where
    T: Clone + Send + 'static,
{
    settle("copy2", run_copy(&input, &[out1, out2]));
}

/// Sends every value received on `input` to each channel in `outs`.
pub fn copy_n<T>(input: Receiver<T>, outs: Vec<Sender<T>>)
where
    T: Clone + Send + 'static,
{
    settle("copy_n", run_copy(&input, &outs));
}

/// Per-destination ordering chain of pending send tasks.
#[derive(Default)]
struct Lane {
    /// Disconnects once the most recently launched send task has finished.
    last: Option<Receiver<Signal>>,
}

/// The position of one send task in its lane.
struct Turn {
    after: Option<Receiver<Signal>>,
    /// Never sent on; dropping it tells the next task in the lane to go.
    _finished: Sender<Signal>,
}

impl Lane {
    fn next_turn(&mut self) -> Turn {
        let (finished, waiter) = pnp_chan::channel();
        Turn {
            after: self.last.replace(waiter),
            _finished: finished,
        }
    }
}

impl Turn {
    fn wait_for_predecessor(&self) {
        if let Some(after) = &self.after {
            // Only ever returns through disconnection.
            let _ = after.recv();
        }
    }
}

fn run_copy<T>(input: &Receiver<T>, outs: &[Sender<T>]) -> Result<(), Closed>
where
    T: Clone + Send + 'static,
{
    let mut lanes: Vec<Lane> = outs.iter().map(|_| Lane::default()).collect();
    loop {
        let v = input.recv()?;
        for (out, lane) in outs.iter().zip(lanes.iter_mut()) {
            let value = v.clone();
            let out = out.clone();
            let turn = lane.next_turn();
            let launched = thread::Builder::new().name("copy-send".into()).spawn(move || {
                turn.wait_for_predecessor();
                if send_value(value, &out).is_err() {
                    tracing::trace!("broadcast destination abandoned");
                }
            });
            if let Err(error) = launched {
                tracing::warn!(%error, "broadcast send task not launched, value dropped");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnp_chan::channel;
    use std::time::Duration;

    #[test]
    fn copy2_delivers_to_both_outputs() {
        let (in_tx, in_rx) = channel();
        let (a_tx, a_rx) = channel();
        let (b_tx, b_rx) = channel();
        thread::spawn(move || copy2(in_rx, a_tx, b_tx));

        in_tx.send(5).unwrap();
        assert_eq!(b_rx.recv().unwrap(), 5);
        assert_eq!(a_rx.recv().unwrap(), 5);
    }

    #[test]
    fn slow_destination_keeps_broadcast_order() {
        let (in_tx, in_rx) = channel();
        let (fast_tx, fast_rx) = channel();
        let (slow_tx, slow_rx) = channel();
        thread::spawn(move || copy2(in_rx, fast_tx, slow_tx));

        for v in 0..20 {
            in_tx.send(v).unwrap();
            assert_eq!(fast_rx.recv().unwrap(), v);
        }
        // The slow side has 20 pending send tasks queued up behind each other.
        thread::sleep(Duration::from_millis(20));
        let slow: Vec<i64> = (0..20).map(|_| slow_rx.recv().unwrap()).collect();
        assert_eq!(slow, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn copy_n_reaches_every_destination() {
        let (in_tx, in_rx) = channel();
        let (txs, rxs): (Vec<_>, Vec<_>) = (0..4).map(|_| channel::<i64>()).unzip();
        thread::spawn(move || copy_n(in_rx, txs));

        in_tx.send(11).unwrap();
        in_tx.send(12).unwrap();
        for rx in &rxs {
            assert_eq!(rx.recv().unwrap(), 11);
            assert_eq!(rx.recv().unwrap(), 12);
        }
    }
}
