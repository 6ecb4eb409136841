use pnp_chan::{Closed, Receiver, Sender, settle};
use std::thread;
use std::time::Duration;

/// Relays each value after holding it for `pause`.
pub fn delay<T>(input: Receiver<T>, out: Sender<T>, pause: Duration) {
    settle("delay", run_delay(&input, &out, pause));
}

fn run_delay<T>(input: &Receiver<T>, out: &Sender<T>, pause: Duration) -> Result<(), Closed> {
    loop {
        let v = input.recv()?;
        thread::sleep(pause);
        out.send(v)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnp_chan::channel;
    use std::time::Instant;

    #[test]
    fn delay_holds_each_value() {
        let (in_tx, in_rx) = channel();
        let (out_tx, out_rx) = channel();
        thread::spawn(move || delay(in_rx, out_tx, Duration::from_millis(30)));

        let start = Instant::now();
        in_tx.send(1).unwrap();
        assert_eq!(out_rx.recv().unwrap(), 1);
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
