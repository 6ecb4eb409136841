//! Networks composed purely from bricks.
//!
//! Each function allocates its internal channels, launches its bricks and
//! returns as soon as they are running. The network lives on until its
//! output is abandoned.
//!
//! ```text
//! numbers:    ┌────────┐ a ┌───────┐ out
//!          ┌─►│ prefix │──►│ copy2 │────►
//!          │  └────────┘   └───────┘
//!          │  c ┌───────┐  b  │
//!          └────│ plus1 │◄────┘
//!               └───────┘
//! ```
//!
//! Every feedback loop below contains a `prefix`, which emits before it first
//! receives and so lets the cycle start.

use pnp_bricks::{copy2, minus, plus, plus1, prefix, tail};
use pnp_chan::{Receiver, Sender, channel, spawn};
use std::io;

/// Sends `initial, initial + 1, initial + 2, …` on `out`.
pub fn numbers(out: Sender<i64>, initial: i64) -> io::Result<()> {
    let (a_tx, a_rx) = channel();
    let (b_tx, b_rx) = channel();
    let (c_tx, c_rx) = channel();
    spawn("numbers/prefix", move || prefix(c_rx, a_tx, initial))?;
    spawn("numbers/copy2", move || copy2(a_rx, b_tx, out))?;
    spawn("numbers/plus1", move || plus1(b_rx, c_tx))?;
    Ok(())
}

/// Sends the running sum of the values received on `input`.
pub fn integrate(input: Receiver<i64>, out: Sender<i64>) -> io::Result<()> {
    let (a_tx, a_rx) = channel();
    let (b_tx, b_rx) = channel();
    let (c_tx, c_rx) = channel();
    spawn("integrate/prefix", move || prefix(b_rx, c_tx, 0))?;
    spawn("integrate/plus", move || plus(input, c_rx, a_tx))?;
    spawn("integrate/copy2", move || copy2(a_rx, b_tx, out))?;
    Ok(())
}

/// Sends the sum of each consecutive pair: `0, 1, 2, 3` becomes `1, 3, 5`.
pub fn pairs(input: Receiver<i64>, out: Sender<i64>) -> io::Result<()> {
    let (a_tx, a_rx) = channel();
    let (b_tx, b_rx) = channel();
    let (c_tx, c_rx) = channel();
    spawn("pairs/copy2", move || copy2(input, a_tx, b_tx))?;
    spawn("pairs/tail", move || tail(b_rx, c_tx))?;
    spawn("pairs/plus", move || plus(a_rx, c_rx, out))?;
    Ok(())
}

/// Sends the squares `1, 4, 9, …` (numbers → integrate → pairs).
pub fn squares(out: Sender<i64>) -> io::Result<()> {
    let (n2i_tx, n2i_rx) = channel();
    let (i2p_tx, i2p_rx) = channel();
    numbers(n2i_tx, 0)?;
    integrate(n2i_rx, i2p_tx)?;
    pairs(i2p_rx, out)
}

/// Inverse of [`integrate`]: sends each value minus its predecessor, with the
/// first value taken as-is.
pub fn reverse_integrate(input: Receiver<i64>, out: Sender<i64>) -> io::Result<()> {
    let (a_tx, a_rx) = channel();
    let (b_tx, b_rx) = channel();
    let (c_tx, c_rx) = channel();
    spawn("reverse_integrate/copy2", move || copy2(input, a_tx, b_tx))?;
    spawn("reverse_integrate/prefix", move || prefix(b_rx, c_tx, 0))?;
    spawn("reverse_integrate/minus", move || minus(a_rx, c_rx, out))?;
    Ok(())
}

/// Sends the Fibonacci sequence `0, 1, 1, 2, 3, 5, …`.
///
/// Two chained prefixes seed the loop with `0, 1`; [`pairs`] then feeds each
/// sum of the last two outputs back in.
pub fn fibonacci(out: Sender<i64>) -> io::Result<()> {
    let (a_tx, a_rx) = channel();
    let (b_tx, b_rx) = channel();
    let (c_tx, c_rx) = channel();
    let (d_tx, d_rx) = channel();
    spawn("fibonacci/prefix0", move || prefix(d_rx, a_tx, 0))?;
    spawn("fibonacci/prefix1", move || prefix(c_rx, d_tx, 1))?;
    spawn("fibonacci/copy2", move || copy2(a_rx, b_tx, out))?;
    pairs(b_rx, c_tx)
}
