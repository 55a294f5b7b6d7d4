//! Writes rendered text to stdout

use std::io::{self, Write};

use crate::error::Result;

/// Print rendered text followed by a newline
pub fn print_styled(text: &str) -> Result<()> {
    write_styled(&mut io::stdout().lock(), text)
}

fn write_styled<W: Write>(out: &mut W, text: &str) -> Result<()> {
    let result = writeln!(out, "{}", text).and_then(|_| out.flush());

    match result {
        // Reader went away (e.g. piped into `head`); nothing left to do
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => Ok(other?),
    }
}
