//! N-way aggregation into tab-separated records.

use pnp_chan::{Closed, Receiver, Sender, gather, settle};
use std::fmt::Display;

/// Collects one value from every input per round and sends them as a record.
///
/// The N receives of a round run concurrently; nothing is emitted until all
/// of them have completed. See [`format_record`] for the layout.
///
/// # Panics
/// Panics if `inputs` is empty: a round with nothing to wait for would emit
/// empty records without end.
pub fn tabulate<T>(inputs: Vec<Receiver<T>>, out: Sender<String>)
where
    T: Display + Send + 'static,
{
    assert!(!inputs.is_empty(), "tabulate needs at least one input");
    settle("tabulate", run_tabulate(&inputs, &out));
}

/// Formats one round: every value preceded by a tab, in input order, then a
/// newline.
///
/// # Example
/// ```
/// assert_eq!(pnp_bricks::format_record(&[1, 2, 3]), "\t1\t2\t3\n");
/// ```
pub fn format_record<T: Display>(values: &[T]) -> String {
    let mut record: String = values.iter().map(|v| format!("\t{v}")).collect();
    record.push('\n');
    record
}

fn run_tabulate<T>(inputs: &[Receiver<T>], out: &Sender<String>) -> Result<(), Closed>
where
    T: Display + Send + 'static,
{
    loop {
        let values = gather(inputs)?;
        out.send(format_record(&values))?;
    }
}
