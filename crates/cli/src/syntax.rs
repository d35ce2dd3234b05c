// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PHP syntax sanity checking.
//!
//! Modeled as an injected capability so the shell-based `php -l`
//! implementation can be swapped for an in-process one.

use std::io::Write;
use std::process::Command;

/// Marker `php -l` prints when a file parses cleanly.
const NO_SYNTAX_ERRORS: &str = "No syntax errors";

/// Outcome of a syntax sanity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxStatus {
    /// The source parses cleanly.
    Ok,
    /// The checker rejected the source; carries its raw diagnostic.
    Invalid(String),
    /// The checker itself could not run, e.g. no `php` binary on PATH.
    Unavailable,
}

/// A syntax sanity checker for PHP source text.
pub trait SyntaxChecker {
    fn check(&self, source: &str) -> SyntaxStatus;
}

/// Shell-based checker that lints through `php -l`.
///
/// The source is written verbatim to a temp file and linted as-is;
/// `php -l` parses without executing, so no synthetic wrapper is
/// needed. The temp file is removed when the handle drops, including
/// on error paths.
pub struct PhpLint;

impl SyntaxChecker for PhpLint {
    fn check(&self, source: &str) -> SyntaxStatus {
        let mut temp = match tempfile::Builder::new()
            .prefix("stubgen")
            .suffix(".php")
            .tempfile()
        {
            Ok(temp) => temp,
            Err(e) => {
                tracing::warn!("syntax check skipped, temp file creation failed: {e}");
                return SyntaxStatus::Unavailable;
            }
        };
        if let Err(e) = temp.write_all(source.as_bytes()) {
            tracing::warn!("syntax check skipped, temp file write failed: {e}");
            return SyntaxStatus::Unavailable;
        }

        let output = match Command::new("php").arg("-l").arg(temp.path()).output() {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("syntax check skipped, php not runnable: {e}");
                return SyntaxStatus::Unavailable;
            }
        };

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        classify_output(&text)
    }
}

/// Map raw linter output onto a status. Anything without the
/// "No syntax errors" marker counts as a syntax error.
fn classify_output(text: &str) -> SyntaxStatus {
    if text.contains(NO_SYNTAX_ERRORS) {
        SyntaxStatus::Ok
    } else {
        SyntaxStatus::Invalid(text.trim().to_string())
    }
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
