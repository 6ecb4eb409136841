//! Benchmark rigs: small networks with the bench thread sitting on every
//! open channel end.

use pnp_bricks::{QueueConfig, plus, plus_p, prefix, prompt, queue};
use pnp_chan::{Receiver, Sender, Signal, channel, spawn};

// ─── Pair Combiner ──────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
pub enum Strategy {
    Race,
    Barrier,
}

pub struct PairRig {
    pub in1: Sender<i64>,
    pub in2: Sender<i64>,
    pub out: Receiver<i64>,
}

impl PairRig {
    pub fn launch(strategy: Strategy) -> Self {
        let (in1, in1_rx) = channel();
        let (in2, in2_rx) = channel();
        let (out_tx, out) = channel();
        let combiner = match strategy {
            Strategy::Race => plus,
            Strategy::Barrier => plus_p,
        };
        spawn("bench/combiner", move || combiner(in1_rx, in2_rx, out_tx))
            .expect("failed to launch combiner");
        Self { in1, in2, out }
    }

    /// One full round: feed both inputs, read the sum.
    #[inline]
    pub fn round(&self, a: i64, b: i64) -> i64 {
        self.in2.send(b).expect("combiner gone");
        self.in1.send(a).expect("combiner gone");
        self.out.recv().expect("combiner gone")
    }
}

// ─── Relay ──────────────────────────────────────────────────────────────────

pub struct RelayRig {
    pub input: Sender<i64>,
    pub out: Receiver<i64>,
}

impl RelayRig {
    pub fn launch() -> Self {
        let (input, in_rx) = channel();
        let (out_tx, out) = channel();
        spawn("bench/prefix", move || prefix(in_rx, out_tx, 0)).expect("failed to launch prefix");
        out.recv().expect("missing seed");
        Self { input, out }
    }

    #[inline]
    pub fn round(&self, v: i64) -> i64 {
        self.input.send(v).expect("prefix gone");
        self.out.recv().expect("prefix gone")
    }
}

// ─── Queue ──────────────────────────────────────────────────────────────────

pub struct QueueRig {
    pub put: Sender<i64>,
    pub get: Sender<Signal>,
    pub out: Receiver<i64>,
}

impl QueueRig {
    pub fn launch(capacity: usize) -> Self {
        let (put, put_rx) = channel();
        let (get, get_rx) = channel();
        let (out_tx, out) = channel();
        spawn("bench/queue", move || queue(put_rx, get_rx, out_tx, QueueConfig::new(capacity)))
            .expect("failed to launch queue");
        Self { put, get, out }
    }

    /// Puts then gets one value straight back.
    #[inline]
    pub fn round(&self, v: i64) -> i64 {
        self.put.send(v).expect("queue gone");
        self.get.send(()).expect("queue gone");
        self.out.recv().expect("queue gone")
    }
}

/// Launches `queue → prompt` and returns the put end plus the prompt output.
pub fn launch_prompted_queue(capacity: usize) -> (Sender<i64>, Receiver<i64>) {
    let (put, put_rx) = channel();
    let (get_tx, get_rx) = channel();
    let (reply_tx, reply_rx) = channel();
    let (out_tx, out) = channel();
    spawn("bench/queue", move || queue(put_rx, get_rx, reply_tx, QueueConfig::new(capacity)))
        .expect("failed to launch queue");
    spawn("bench/prompt", move || prompt(get_tx, reply_rx, out_tx)).expect("failed to launch prompt");
    (put, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rigs_compute_expected_values() {
        let race = PairRig::launch(Strategy::Race);
        let barrier = PairRig::launch(Strategy::Barrier);
        assert_eq!(race.round(2, 3), 5);
        assert_eq!(barrier.round(2, 3), 5);

        assert_eq!(RelayRig::launch().round(9), 9);
        assert_eq!(QueueRig::launch(4).round(-4), -4);

        let (put, out) = launch_prompted_queue(2);
        put.send(1).unwrap();
        assert_eq!(out.recv().unwrap(), 1);
    }
}
