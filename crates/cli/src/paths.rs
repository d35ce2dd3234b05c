// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input-path cleaning and output-path resolution.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Marker used to shorten absolute paths in report messages.
const MODULE_DIR: &str = "/modules";

/// Subdirectory under the project root receiving generated tests.
const TEST_SUBDIR: &str = "tests/src/Unit";

/// Clean a user-supplied source path: strip a leading `./`, then one
/// leading directory segment. `web/modules/custom/x/src/Foo.php`
/// becomes `modules/custom/x/src/Foo.php`.
pub fn clean_input_path(raw: &str) -> &str {
    let stripped = raw.strip_prefix("./").unwrap_or(raw);
    match stripped.split_once('/') {
        Some((_, rest)) => rest,
        None => stripped,
    }
}

/// Path from the `/modules` marker onward when present, the full
/// path otherwise. Keeps report messages readable.
pub fn display_path(path: &Path) -> String {
    let full = path.to_string_lossy();
    match full.find(MODULE_DIR) {
        Some(idx) => full[idx..].to_string(),
        None => full.into_owned(),
    }
}

/// Resolve the output path for a generated test, creating the test
/// directory (recursively, idempotently) when absent.
pub fn test_file_path(root: &Path, class_name: &str) -> io::Result<PathBuf> {
    let dir = root.join(TEST_SUBDIR);
    fs::create_dir_all(&dir)?;
    Ok(dir.join(format!("{class_name}Test.php")))
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
