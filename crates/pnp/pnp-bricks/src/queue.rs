//! Bounded circular-buffer queue served over channels.
//!
//! The queue is a pure server: it never initiates communication and answers
//! any acceptable request in bounded time. Clients talk to it over three
//! channels:
//! - `put`: values to enqueue
//! - `get`: payload-free request signals
//! - `out`: the dequeued value, sent in the same round as the `get` it answers
//!
//! # Access Invariant
//! With `count` filled slots out of `capacity`:
//!
//! ```text
//! count == 0          → only put is accepted
//! count == capacity   → only get is accepted
//! otherwise           → put and get race; whichever is ready is served
//! ```
//!
//! The buffer is owned by the serving task alone, so it needs no lock.
//!
//! When every `put` sender has been dropped the server keeps answering `get`
//! until the buffer is empty, then exits.

use pnp_chan::{Closed, Receiver, Sender, Signal, select, settle};

/// Configuration for a queue server.
#[derive(Debug, Copy, Clone)]
pub struct QueueConfig {
    /// Number of slots. At least 1.
    pub capacity: usize,
}

impl QueueConfig {
    /// Creates a configuration with `capacity` slots.
    ///
    /// # Panics
    /// Panics if `capacity` is zero: such a queue would have to be empty and
    /// full at the same time.
    ///
    /// # Example
    /// ```
    /// use pnp_bricks::QueueConfig;
    /// let cfg = QueueConfig::new(3);
    /// assert_eq!(cfg.capacity, 3);
    /// // QueueConfig::new(0);   // Would panic
    /// ```
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Queue capacity must be at least 1");
        Self { capacity }
    }
}

/// Which requests the queue may accept in its current state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Access {
    PutOnly,
    GetOnly,
    Either,
}

/// Fixed-size FIFO over a circular array.
///
/// `front` is where the next put lands, `rear` is where the next get reads.
/// Both advance modulo `capacity`.
#[derive(Debug)]
pub struct CircularBuffer<T> {
    data: Box<[Option<T>]>,
    front: usize,
    rear: usize,
    count: usize,
}

impl<T> CircularBuffer<T> {
    pub fn new(cfg: QueueConfig) -> Self {
        Self {
            data: (0..cfg.capacity).map(|_| None).collect(),
            front: 0,
            rear: 0,
            count: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn access(&self) -> Access {
        if self.count == 0 {
            Access::PutOnly
        } else if self.count == self.capacity() {
            Access::GetOnly
        } else {
            Access::Either
        }
    }

    /// Stores `value` at `front`.
    ///
    /// # Panics
    /// Panics if the buffer is full. The server only calls this after
    /// checking [`CircularBuffer::access`].
    pub fn push(&mut self, value: T) {
        assert!(self.count < self.capacity(), "put accepted on a full queue");
        self.data[self.front] = Some(value);
        self.front = (self.front + 1) % self.capacity();
        self.count += 1;
    }

    /// Removes the value at `rear`, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let value = self.data[self.rear].take();
        self.rear = (self.rear + 1) % self.capacity();
        self.count -= 1;
        value
    }
}

/// Runs a queue server with `cfg.capacity` slots.
///
/// Values still buffered when the producers finish are served before the
/// server exits.
pub fn queue<T>(put: Receiver<T>, get: Receiver<Signal>, out: Sender<T>, cfg: QueueConfig) {
    settle("queue", run_queue(&put, &get, &out, cfg));
}

fn run_queue<T>(
    put: &Receiver<T>,
    get: &Receiver<Signal>,
    out: &Sender<T>,
    cfg: QueueConfig,
) -> Result<(), Closed> {
    let mut buffer = CircularBuffer::new(cfg);
    let mut put_open = true;
    loop {
        // Once every producer is gone the queue only drains.
        let access = match buffer.access() {
            Access::PutOnly if !put_open => return Ok(()),
            Access::Either if !put_open => Access::GetOnly,
            access => access,
        };
        match access {
            Access::PutOnly => accept_put(&mut buffer, put.recv(), &mut put_open),
            Access::GetOnly => {
                get.recv()?;
                serve_get(&mut buffer, out)?;
            }
            Access::Either => select! {
                recv(put) -> v => accept_put(&mut buffer, v, &mut put_open),
                recv(get) -> signal => {
                    signal?;
                    serve_get(&mut buffer, out)?;
                },
            },
        }
        tracing::trace!(count = buffer.len(), "queue round");
    }
}

fn accept_put<T, E>(buffer: &mut CircularBuffer<T>, value: Result<T, E>, put_open: &mut bool) {
    match value {
        Ok(value) => buffer.push(value),
        Err(_) => {
            tracing::debug!(pending = buffer.len(), "queue producers gone, draining");
            *put_open = false;
        }
    }
}

fn serve_get<T>(buffer: &mut CircularBuffer<T>, out: &Sender<T>) -> Result<(), Closed> {
    if let Some(value) = buffer.pop() {
        out.send(value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_two_trace_respects_invariant() {
        let mut q = CircularBuffer::new(QueueConfig::new(2));
        assert_eq!(q.access(), Access::PutOnly);

        q.push(1);
        assert_eq!((q.len(), q.access()), (1, Access::Either));
        q.push(2);
        assert_eq!((q.len(), q.access()), (2, Access::GetOnly));
        assert_eq!(q.pop(), Some(1));
        assert_eq!(q.len(), 1);
        q.push(3);
        assert_eq!((q.len(), q.access()), (2, Access::GetOnly));
        assert_eq!(q.pop(), Some(2));
        assert_eq!(q.pop(), Some(3));
        assert_eq!((q.len(), q.access()), (0, Access::PutOnly));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn indices_wrap_around() {
        let mut q = CircularBuffer::new(QueueConfig::new(3));
        for round in 0..10 {
            q.push(round);
            q.push(round + 100);
            assert_eq!(q.pop(), Some(round));
            assert_eq!(q.pop(), Some(round + 100));
        }
        assert!(q.is_empty());
    }

    #[test]
    fn single_slot_alternates_put_and_get() {
        let mut q = CircularBuffer::new(QueueConfig::new(1));
        q.push('a');
        assert_eq!(q.access(), Access::GetOnly);
        assert_eq!(q.pop(), Some('a'));
        assert_eq!(q.access(), Access::PutOnly);
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn zero_capacity_is_rejected() {
        let _ = QueueConfig::new(0);
    }

    #[test]
    #[should_panic(expected = "full queue")]
    fn push_on_full_buffer_panics() {
        let mut q = CircularBuffer::new(QueueConfig::new(1));
        q.push(1);
        q.push(2);
    }
}
