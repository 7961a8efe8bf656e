//! Orchestration: resolve the runtime directory, announce it, print the file.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::path::{ensure_invocation_fits, runtime_dir, sibling_path};
use crate::io::printer::{PrintOutcome, print_file};

/// Name of the sidecar file expected next to the binary.
pub const SIDECAR_FILE: &str = "example.txt";

/// Resolve the runtime directory from `invocation` and print the sidecar
/// file found there.
///
/// Writes the two label lines to `out` before touching the filesystem, then
/// delegates to [`print_file`]. The invocation path is validated first, so an
/// oversized path fails before any output is produced.
pub fn print_sidecar(
    invocation: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<PrintOutcome> {
    ensure_invocation_fits(invocation)?;

    let dir = runtime_dir(invocation);
    debug!(invocation = %invocation, dir = %dir, "resolved runtime directory");
    writeln!(out, "Runtime directory: {dir}").context("write runtime directory label")?;

    let target = sibling_path(dir, SIDECAR_FILE);
    debug!(target = %target, "opening sidecar file");
    writeln!(out, "Open file at path: {target}").context("write target path label")?;

    print_file(&target, out, err)
}
