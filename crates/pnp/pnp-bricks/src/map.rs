use pnp_chan::{Closed, Receiver, Sender, settle};

/// Sends `v + 1` for every `v` received.
pub fn plus1(input: Receiver<i64>, out: Sender<i64>) {
    settle("plus1", run_map(&input, &out, |v| v + 1));
}

/// Stateless 1:1 transform: sends `f(v)` for every `v` received, in order.
pub fn map<T, U, F>(input: Receiver<T>, out: Sender<U>, f: F)
where
    F: Fn(T) -> U,
{
    settle("map", run_map(&input, &out, f));
}

fn run_map<T, U, F>(input: &Receiver<T>, out: &Sender<U>, f: F) -> Result<(), Closed>
where
    F: Fn(T) -> U,
{
    loop {
        let v = input.recv()?;
        out.send(f(v))?;
    }
}
