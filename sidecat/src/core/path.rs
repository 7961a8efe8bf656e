//! Helpers for deriving the runtime directory from the invocation path.

use anyhow::{Result, bail};

/// The only separator recognized in invocation paths.
pub const SEPARATOR: char = '/';

/// Upper bound on the invocation path length, in bytes.
pub const MAX_INVOCATION_BYTES: usize = 1024;

/// Reject invocation paths longer than [`MAX_INVOCATION_BYTES`].
pub fn ensure_invocation_fits(invocation: &str) -> Result<()> {
    if invocation.len() > MAX_INVOCATION_BYTES {
        bail!(
            "invocation path too long: {} bytes (limit {})",
            invocation.len(),
            MAX_INVOCATION_BYTES
        );
    }
    Ok(())
}

/// Return the invocation path with its final `/`-delimited segment removed.
///
/// Without any separator the input is returned unchanged. A path whose only
/// separator is leading (`/app`) resolves to the empty string.
pub fn runtime_dir(invocation: &str) -> &str {
    match invocation.rfind(SEPARATOR) {
        Some(idx) => &invocation[..idx],
        None => invocation,
    }
}

/// Join `dir` and `file_name` with a single separator.
pub fn sibling_path(dir: &str, file_name: &str) -> String {
    format!("{dir}{SEPARATOR}{file_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_dir_strips_last_segment() {
        assert_eq!(runtime_dir("/usr/local/bin/app"), "/usr/local/bin");
    }

    #[test]
    fn runtime_dir_without_separator_is_unchanged() {
        assert_eq!(runtime_dir("app"), "app");
    }

    #[test]
    fn runtime_dir_with_leading_separator_only_is_empty() {
        assert_eq!(runtime_dir("/app"), "");
    }

    #[test]
    fn runtime_dir_keeps_trailing_separator_prefix() {
        assert_eq!(runtime_dir("bin/app"), "bin");
    }

    #[test]
    fn sibling_path_joins_with_single_separator() {
        assert_eq!(sibling_path("/tmp", "example.txt"), "/tmp/example.txt");
    }

    #[test]
    fn ensure_invocation_fits_accepts_path_at_limit() {
        let exact = "x".repeat(MAX_INVOCATION_BYTES);
        ensure_invocation_fits(&exact).expect("path at limit fits");
    }

    #[test]
    fn ensure_invocation_fits_rejects_oversized_path() {
        let long = "x".repeat(MAX_INVOCATION_BYTES + 1);
        let err = ensure_invocation_fits(&long).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }
}
