//! Order-insensitive two-source combiners.
//!
//! Each round takes exactly one value from each input, whichever arrives
//! first, and sends `op(a, b)` where `a` came from `in1` and `b` from `in2`.
//! Two interchangeable strategies produce identical output sequences:
//!
//! - **Race** ([`combine_race`]): select over both inputs; the winner binds
//!   its value and the same round then blocks on the other input. No
//!   auxiliary tasks.
//! - **Barrier** ([`combine_barrier`]): one one-shot receive task per input,
//!   joined on a counting barrier. Two thread launches per round.

use pnp_chan::{Closed, Receiver, Sender, gather, select, settle};

/// Sum of the pair, race strategy.
pub fn plus(in1: Receiver<i64>, in2: Receiver<i64>, out: Sender<i64>) {
    settle("plus", run_race(&in1, &in2, &out, |a, b| a + b));
}

/// `in1 - in2`, race strategy.
pub fn minus(in1: Receiver<i64>, in2: Receiver<i64>, out: Sender<i64>) {
    settle("minus", run_race(&in1, &in2, &out, |a, b| a - b));
}

/// Sum of the pair, barrier strategy.
pub fn plus_p(in1: Receiver<i64>, in2: Receiver<i64>, out: Sender<i64>) {
    settle("plus_p", run_barrier(in1, in2, &out, |a, b| a + b));
}

/// `in1 - in2`, barrier strategy.
pub fn minus_p(in1: Receiver<i64>, in2: Receiver<i64>, out: Sender<i64>) {
    settle("minus_p", run_barrier(in1, in2, &out, |a, b| a - b));
}

/// Applies `op` to each pair, race strategy.
pub fn combine_race<T, U, F>(in1: Receiver<T>, in2: Receiver<T>, out: Sender<U>, op: F)
where
    F: Fn(T, T) -> U,
{
    settle("combine_race", run_race(&in1, &in2, &out, op));
}

/// Applies `op` to each pair, barrier strategy. `a` always comes from `in1`.
pub fn combine_barrier<T, U, F>(in1: Receiver<T>, in2: Receiver<T>, out: Sender<U>, op: F)
where
    T: Send + 'static,
    F: Fn(T, T) -> U,
{
    settle("combine_barrier", run_barrier(in1, in2, &out, op));
}

fn run_race<T, U, F>(in1: &Receiver<T>, in2: &Receiver<T>, out: &Sender<U>, op: F) -> Result<(), Closed>
where
    F: Fn(T, T) -> U,
{
    loop {
        let (a, b) = select! {
            recv(in1) -> a => {
                let a = a?;
                (a, in2.recv()?)
            },
            recv(in2) -> b => {
                let b = b?;
                (in1.recv()?, b)
            },
        };
        out.send(op(a, b))?;
    }
}

fn run_barrier<T, U, F>(in1: Receiver<T>, in2: Receiver<T>, out: &Sender<U>, op: F) -> Result<(), Closed>
where
    T: Send + 'static,
    F: Fn(T, T) -> U,
{
    let inputs = [in1, in2];
    loop {
        let mut round = gather(&inputs)?.into_iter();
        let (Some(a), Some(b)) = (round.next(), round.next()) else {
            return Err(Closed);
        };
        out.send(op(a, b))?;
    }
}
