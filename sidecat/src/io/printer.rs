//! Line-at-a-time file printing.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use anyhow::{Context, Result};
use tracing::debug;

/// What happened to the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintOutcome {
    /// File opened and its contents were written to the output stream.
    Printed,
    /// File could not be opened; diagnostic written to the error stream.
    OpenFailed,
}

/// Print the file at `path` line by line to `out`.
///
/// Lines are copied as raw bytes so content round-trips verbatim, including a
/// final line without trailing newline. The file handle is released by scope
/// on every exit path.
///
/// An unopenable file is reported on `err` as `Failed to open file: <path>`
/// and is not an error at this level; read and write failures are.
pub fn print_file(path: &str, out: &mut impl Write, err: &mut impl Write) -> Result<PrintOutcome> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(open_err) => {
            debug!(path = %path, error = %open_err, "open failed");
            writeln!(err, "Failed to open file: {path}").context("write open-failure diagnostic")?;
            return Ok(PrintOutcome::OpenFailed);
        }
    };

    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .with_context(|| format!("read {path}"))?;
        if read == 0 {
            break;
        }
        out.write_all(&line).context("write file contents")?;
    }
    out.flush().context("flush output")?;
    Ok(PrintOutcome::Printed)
}
