//! Composable channel processes ("bricks").
//!
//! Every brick is a plain function that owns its channel ends and loops
//! forever; launch each one on its own task (see [`pnp_chan::spawn`]) and wire
//! them together by sharing channels. A brick returns only when its network
//! has been abandoned, i.e. the peers of a channel it is blocked on are gone.
//!
//! # Bricks
//!
//! - [`prefix()`], [`reset_prefix`] - seeded relays
//! - [`plus1`], [`map`] - stateless transforms
//! - [`copy2`], [`copy_n`] - fan-out broadcast
//! - [`tail()`] - drop the first value
//! - [`plus`], [`minus`], [`plus_p`], [`minus_p`] - two-source combiners
//! - [`queue()`] / [`prompt()`] - bounded queue server and its client
//! - [`tabulate()`] - N-way aggregation into text records
//! - [`delay()`] - timed relay
//!
//! # Feedback Loops
//!
//! Cycles are legal, but every cycle needs a seed: a brick that sends before
//! it first receives ([`prefix()`] or [`reset_prefix`]). Without one, every
//! brick in the cycle blocks on its first receive forever.

mod combine;
mod copy;
mod delay;
mod map;
mod prefix;
mod prompt;
mod queue;
mod tabulate;
mod tail;

pub use combine::{combine_barrier, combine_race, minus, minus_p, plus, plus_p};
pub use copy::{copy2, copy_n};
pub use delay::delay;
pub use map::{map, plus1};
pub use prefix::{prefix, reset_prefix};
pub use prompt::prompt;
pub use queue::{Access, CircularBuffer, QueueConfig, queue};
pub use tabulate::{format_record, tabulate};
pub use tail::tail;
