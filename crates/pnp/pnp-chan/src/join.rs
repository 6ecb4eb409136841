//! Counting barrier and the concurrent-receive round built on top of it.
//!
//! # Protocol
//! 1. The coordinator creates a [`Join`] and hands one [`Done`] token to each
//!    auxiliary task (`Join::add`, one increment per task).
//! 2. Each task performs exactly one channel operation, writes its result
//!    into its own slot, then releases its token.
//! 3. `Join::wait` unblocks only after every token has been released.
//!
//! Tokens are released on drop, so a task that unwinds still counts down.

use crate::channel::{Closed, Receiver, slot};
use crate::relay::recv_value;
use crossbeam_utils::sync::WaitGroup;
use std::thread;

/// Counting barrier for one round of auxiliary tasks.
pub struct Join {
    group: WaitGroup,
}

/// Completion token held by one auxiliary task.
///
/// Releasing it (explicitly or by drop) decrements the barrier.
#[must_use = "dropping a Done token immediately signals completion"]
pub struct Done {
    _group: WaitGroup,
}

impl Join {
    /// Creates a barrier with no registered tasks.
    pub fn new() -> Self {
        Self {
            group: WaitGroup::new(),
        }
    }

    /// Registers one more task the barrier must wait for.
    pub fn add(&self) -> Done {
        Done {
            _group: self.group.clone(),
        }
    }

    /// Blocks until every token handed out by [`Join::add`] is released.
    pub fn wait(self) {
        self.group.wait();
    }
}

impl Default for Join {
    fn default() -> Self {
        Self::new()
    }
}

impl Done {
    /// Signals completion.
    #[inline]
    pub fn release(self) {}
}

/// Runs one round of concurrent one-shot receives, one per input.
///
/// Each input gets its own short-lived task and its own result slot; the
/// caller blocks on a [`Join`] until all of them have finished. The values are
/// returned in input order regardless of arrival order.
///
/// # Errors
/// Returns [`Closed`] if any input was abandoned during the round. The round
/// still waits for every other input first.
pub fn gather<T: Send + 'static>(inputs: &[Receiver<T>]) -> Result<Vec<T>, Closed> {
    let join = Join::new();
    let mut slots = Vec::with_capacity(inputs.len());

    for input in inputs {
        let (slot_tx, slot_rx) = slot();
        let input = input.clone();
        let done = join.add();
        let launched = thread::Builder::new().name("gather-recv".into()).spawn(move || {
            // Abandonment leaves the slot empty; the coordinator reports it.
            let _ = recv_value(&input, &slot_tx, done);
        });
        // A task that never ran releases its token on drop and leaves its
        // slot empty, so the round reports Closed.
        if let Err(error) = launched {
            tracing::warn!(%error, "gather receive task not launched");
        }
        slots.push(slot_rx);
    }

    join.wait();

    slots
        .iter()
        .map(|slot| slot.try_recv().map_err(|_| Closed))
        .collect()
}
