//! Stable exit codes for the sidecat binary.

/// Runtime directory resolved and the sidecar file was printed.
pub const OK: i32 = 0;
/// Invocation path was unusable (not UTF-8, too long) or an output write failed.
pub const INVALID: i32 = 1;
/// The sidecar file could not be opened.
pub const OPEN_FAILED: i32 = 2;
