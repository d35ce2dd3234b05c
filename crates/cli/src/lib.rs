// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PHPUnit scaffold generation for PHP source files.
//!
//! The pipeline is linear: validate the source file, extract its
//! namespace, class name, and method names by regex scanning, render
//! a scaffold test class with one placeholder test per method, write
//! it under `tests/src/Unit`, and print a run report.

pub mod cli;
pub mod color;
pub mod console;
pub mod extract;
pub mod paths;
pub mod render;
pub mod report;
pub mod syntax;
pub mod validate;
