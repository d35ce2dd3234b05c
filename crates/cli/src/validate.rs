// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source file validation ahead of scaffold generation.
//!
//! Gates run in order and short-circuit on the first failure:
//! existence, non-emptiness, syntax sanity, testable code. The
//! syntax gate is advisory: an unavailable checker skips it instead
//! of failing the run.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::paths::display_path;
use crate::syntax::{SyntaxChecker, SyntaxStatus};

/// Confirmation for a file passing every gate.
pub const FILE_CORRECT: &str = "The file is correct.";

/// Why a source file was rejected. The display form of each variant
/// is the exact message recorded in the run report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("File does not exist: {0}")]
    NotFound(String),
    #[error("The file is empty: {0}")]
    Empty(String),
    #[error("Syntax errors found in the file: {0}")]
    Syntax(String),
    #[error("The file does not contain any valid PHP classes or functions: {0}")]
    NoTestableCode(String),
}

// A class declaration, or a function name followed by its parameter
// list, anywhere after an opening `<?php` tag.
#[allow(clippy::expect_used)]
static TESTABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<\?php.*?\b(?:class\s+\w+|function\s+\w+\s*\()")
        .expect("valid regex pattern")
});

/// Validate a candidate source file and return its raw content so
/// the caller reads the file exactly once.
pub fn validate(path: &Path, checker: &dyn SyntaxChecker) -> Result<String, ValidateError> {
    let display = display_path(path);

    if !path.exists() {
        return Err(ValidateError::NotFound(display));
    }
    let bytes = fs::read(path).map_err(|_| ValidateError::NotFound(display.clone()))?;
    let contents = String::from_utf8_lossy(&bytes).into_owned();
    if contents.is_empty() {
        return Err(ValidateError::Empty(display));
    }

    match checker.check(&contents) {
        SyntaxStatus::Ok => {}
        SyntaxStatus::Invalid(diagnostic) => {
            tracing::debug!("syntax checker diagnostic: {diagnostic}");
            return Err(ValidateError::Syntax(display));
        }
        SyntaxStatus::Unavailable => {
            tracing::warn!("syntax checker unavailable, skipping syntax gate");
        }
    }

    if !contains_testable_code(&contents) {
        return Err(ValidateError::NoTestableCode(display));
    }

    tracing::debug!("{FILE_CORRECT}");
    Ok(contents)
}

/// True when the content declares at least one class or function
/// after an opening `<?php` tag.
pub fn contains_testable_code(content: &str) -> bool {
    TESTABLE.is_match(content)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
