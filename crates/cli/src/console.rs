// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Quiet-aware colored console output.
//!
//! The run report renders through this sink. In quiet mode every
//! write is a no-op; callers never need to check the flag themselves.

use std::io;

use termcolor::{Buffer, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Output sink for user-facing report text.
pub struct Console {
    sink: Sink,
    quiet: bool,
}

enum Sink {
    Stream(StandardStream),
    Buffer(Buffer),
}

impl Console {
    /// Console writing to stdout with the given color choice.
    pub fn stdout(choice: ColorChoice, quiet: bool) -> Self {
        Self {
            sink: Sink::Stream(StandardStream::stdout(choice)),
            quiet,
        }
    }

    /// In-memory console capturing plain text. Used by tests.
    pub fn buffer(quiet: bool) -> Self {
        Self {
            sink: Sink::Buffer(Buffer::no_color()),
            quiet,
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Print a line. An empty message prints a blank line.
    pub fn line(&mut self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.writer(), "{msg}")
    }

    /// Print a line in the given color spec.
    pub fn colored_line(&mut self, spec: &ColorSpec, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let writer = self.writer();
        writer.set_color(spec)?;
        writeln!(writer, "{msg}")?;
        writer.reset()
    }

    /// Text captured so far. Empty for stdout consoles.
    pub fn captured(&self) -> String {
        match &self.sink {
            Sink::Stream(_) => String::new(),
            Sink::Buffer(buffer) => String::from_utf8_lossy(buffer.as_slice()).into_owned(),
        }
    }

    fn writer(&mut self) -> &mut dyn WriteColor {
        match &mut self.sink {
            Sink::Stream(stream) => stream,
            Sink::Buffer(buffer) => buffer,
        }
    }
}
