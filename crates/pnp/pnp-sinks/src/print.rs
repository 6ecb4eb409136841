use crate::{SinkError, finish};
use pnp_chan::{Closed, Receiver, Sender, settle};
use std::io::Write;

/// Last line written by [`console`].
pub const CONSOLE_FOOTER: &str = "Console Output Finished";

/// Writes each value on its own line until a negative value arrives.
pub fn consumer<W: Write>(input: Receiver<i64>, writer: W) {
    finish("consumer", run_consumer(&input, writer));
}

/// Sends the text form `" {v}, "` of every integer received.
pub fn convert_int_str(input: Receiver<i64>, out: Sender<String>) {
    settle("convert_int_str", run_convert(&input, &out));
}

/// Writes every string received on its own line, forever.
pub fn display<W: Write>(input: Receiver<String>, writer: W) {
    finish("display", run_display(&input, writer));
}

/// Writes `title`, then exactly `limit` received strings, then
/// [`CONSOLE_FOOTER`], and returns.
pub fn console<W: Write>(input: Receiver<String>, writer: W, title: &str, limit: usize) {
    finish("console", run_console(&input, writer, title, limit));
}

fn run_consumer<W: Write>(input: &Receiver<i64>, mut writer: W) -> Result<(), SinkError> {
    loop {
        let v = input.recv().map_err(Closed::from)?;
        if v < 0 {
            return Ok(());
        }
        writeln!(writer, "{v}")?;
        writer.flush()?;
    }
}

fn run_convert(input: &Receiver<i64>, out: &Sender<String>) -> Result<(), Closed> {
    loop {
        let v = input.recv()?;
        out.send(format!(" {v}, "))?;
    }
}

fn run_display<W: Write>(input: &Receiver<String>, mut writer: W) -> Result<(), SinkError> {
    loop {
        let s = input.recv().map_err(Closed::from)?;
        writeln!(writer, "{s}")?;
        writer.flush()?;
    }
}

fn run_console<W: Write>(
    input: &Receiver<String>,
    mut writer: W,
    title: &str,
    limit: usize,
) -> Result<(), SinkError> {
    writeln!(writer, "{title}")?;
    for _ in 0..limit {
        let s = input.recv().map_err(Closed::from)?;
        writeln!(writer, "{s}")?;
    }
    writeln!(writer, "{CONSOLE_FOOTER}")?;
    writer.flush()?;
    Ok(())
}
