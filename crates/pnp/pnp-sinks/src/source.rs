use pnp_chan::{Closed, Sender, settle};

/// End-of-stream marker sent after the last value.
pub const SENTINEL: i64 = -1;

/// Sends `0, 1, …, iterations - 1`, then [`SENTINEL`], then returns.
pub fn producer(out: Sender<i64>, iterations: i64) {
    settle("producer", run_producer(&out, iterations));
}

fn run_producer(out: &Sender<i64>, iterations: i64) -> Result<(), Closed> {
    for v in 0..iterations {
        out.send(v)?;
    }
    out.send(SENTINEL)?;
    Ok(())
}
