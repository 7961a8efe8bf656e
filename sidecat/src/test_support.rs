//! Test-only helpers for constructing runtime directory layouts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::print::SIDECAR_FILE;

/// Temporary directory standing in for the directory containing the binary.
pub struct RuntimeLayout {
    temp: TempDir,
}

impl RuntimeLayout {
    pub fn new() -> Result<Self> {
        let temp = TempDir::new().context("create temp runtime directory")?;
        Ok(Self { temp })
    }

    pub fn dir(&self) -> &Path {
        self.temp.path()
    }

    /// Invocation path for a program named `name` inside the layout.
    pub fn invocation(&self, name: &str) -> String {
        format!("{}/{name}", self.dir().display())
    }

    /// Write the sidecar file with `contents`, returning its path.
    pub fn write_sidecar(&self, contents: &str) -> Result<PathBuf> {
        let path = self.dir().join(SIDECAR_FILE);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
