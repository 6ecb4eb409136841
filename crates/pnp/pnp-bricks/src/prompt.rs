use pnp_chan::{Closed, Receiver, Sender, Signal, settle};

/// Request/reply client with a single outstanding request.
///
/// Each round sends a signal on `get`, waits for exactly one reply on `recv`
/// and forwards it unchanged on `out`. The next request is only issued once
/// the reply has been delivered downstream.
///
/// Paired with [`crate::queue()`], a prompt decouples the rate at which a
/// stream is produced from the rate at which it is consumed.
pub fn prompt<T>(get: Sender<Signal>, recv: Receiver<T>, out: Sender<T>) {
    settle("prompt", run_prompt(&get, &recv, &out));
}

fn run_prompt<T>(get: &Sender<Signal>, recv: &Receiver<T>, out: &Sender<T>) -> Result<(), Closed> {
    loop {
        get.send(())?;
        out.send(recv.recv()?)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnp_chan::channel;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn prompt_never_pipelines_requests() {
        let (get_tx, get_rx) = channel();
        let (reply_tx, reply_rx) = channel();
        let (out_tx, out_rx) = channel();
        thread::spawn(move || prompt(get_tx, reply_rx, out_tx));

        get_rx.recv().unwrap();
        // Reply outstanding: a second request must not be offered yet.
        assert!(get_rx.recv_timeout(Duration::from_millis(50)).is_err());

        reply_tx.send("first").unwrap();
        assert_eq!(out_rx.recv().unwrap(), "first");

        get_rx.recv().unwrap();
        reply_tx.send("second").unwrap();
        assert_eq!(out_rx.recv().unwrap(), "second");
    }
}
