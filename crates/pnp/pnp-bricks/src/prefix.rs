//! Seeded relays.
//!
//! Both relays emit their seed before their first receive, which makes them
//! the bricks that break startup deadlock in feedback loops.

use pnp_chan::{Closed, Receiver, Sender, select, settle};

/// Sends `initial` on `out`, then relays every value from `input` unchanged.
pub fn prefix<T>(input: Receiver<T>, out: Sender<T>, initial: T) {
    settle("prefix", run_prefix(&input, &out, initial));
}

/// Like [`prefix`], but a value arriving on `reset` overrides the next output.
///
/// # Reset Round
/// When `reset` wins the race against `input`:
/// 1. take the reset value `r`
/// 2. receive and discard exactly one value from `input`
/// 3. send `r` on `out`
///
/// Step 2 keeps the relay in step with whatever feeds `input`: one reset
/// always consumes one input value.
///
/// Dropping every `reset` sender degrades the brick into a plain [`prefix`].
pub fn reset_prefix<T>(input: Receiver<T>, out: Sender<T>, reset: Receiver<T>, initial: T) {
    settle("reset_prefix", run_reset_prefix(&input, &out, &reset, initial));
}

fn run_prefix<T>(input: &Receiver<T>, out: &Sender<T>, initial: T) -> Result<(), Closed> {
    out.send(initial)?;
    relay(input, out)
}

fn relay<T>(input: &Receiver<T>, out: &Sender<T>) -> Result<(), Closed> {
    loop {
        out.send(input.recv()?)?;
    }
}

fn run_reset_prefix<T>(
    input: &Receiver<T>,
    out: &Sender<T>,
    reset: &Receiver<T>,
    initial: T,
) -> Result<(), Closed> {
    out.send(initial)?;
    loop {
        select! {
            recv(reset) -> r => match r {
                Ok(r) => {
                    input.recv()?;
                    out.send(r)?;
                }
                Err(_) => return relay(input, out),
            },
            recv(input) -> v => out.send(v?)?,
        }
    }
}
