use pnp_chan::{Closed, Receiver, Sender, settle};

/// Drops the first value received on `input`, then relays the rest unchanged.
pub fn tail<T>(input: Receiver<T>, out: Sender<T>) {
    settle("tail", run_tail(&input, &out));
}

fn run_tail<T>(input: &Receiver<T>, out: &Sender<T>) -> Result<(), Closed> {
    input.recv()?;
    loop {
        out.send(input.recv()?)?;
    }
}
