//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;

use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command configured to run the stubgen binary
pub fn stubgen_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("stubgen"))
}

/// Temporary project root holding PHP sources for one spec.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Create an empty project root.
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir should be created"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file under the project root, creating parent dirs.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("parent dirs should be created");
        }
        std::fs::write(&path, content).expect("file should be written");
        path
    }

    /// Read a file under the project root.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).expect("file should be readable")
    }
}
