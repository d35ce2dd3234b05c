// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run report accumulation and rendering.

use std::io;

use crate::color::scheme;
use crate::console::Console;

/// Aggregated counts and messages for one run.
///
/// Counters are independent: a source contributing a warning still
/// counts as seen, and the four numbers are not required to sum.
#[derive(Debug, Default)]
pub struct RunReport {
    pub sources: usize,
    pub successes: usize,
    pub warnings_count: usize,
    pub errors_count: usize,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one identified source.
    pub fn source_seen(&mut self) {
        self.sources += 1;
    }

    /// Record one successful generation.
    pub fn success(&mut self) {
        self.successes += 1;
    }

    /// Record a warning message and bump the warning counter.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings_count += 1;
        self.warnings.push(message.into());
    }

    /// Record an error message and bump the error counter.
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors_count += 1;
        self.errors.push(message.into());
    }

    /// Render the report through the console in its fixed order.
    /// Messages appear in the order they were recorded.
    pub fn render(&self, console: &mut Console, elapsed_seconds: Option<f64>) -> io::Result<()> {
        console.line("")?;
        console.line("Generation is finished!")?;
        console.line("")?;
        console.line(&format!("{} source(s) identified", self.sources))?;
        console.colored_line(&scheme::success(), &format!("{} success(es)", self.successes))?;
        console.colored_line(
            &scheme::warning(),
            &format!("{} warning(s)", self.warnings_count),
        )?;
        console.colored_line(&scheme::error(), &format!("{} error(s)", self.errors_count))?;

        if !self.warnings.is_empty() {
            console.colored_line(&scheme::warning(), "Warnings:")?;
            for warning in &self.warnings {
                console.line(&format!("- {warning}"))?;
            }
        }

        if !self.errors.is_empty() {
            console.line("")?;
            console.colored_line(&scheme::error(), "Errors:")?;
            for error in &self.errors {
                console.line(&format!("- {error}"))?;
            }
        }

        console.line("")?;
        if let Some(elapsed) = elapsed_seconds {
            console.line(&format!("Execution time: {elapsed:.3} s"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
