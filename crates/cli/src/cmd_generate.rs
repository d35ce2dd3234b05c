// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generate command implementation.
//!
//! Orchestrates the pipeline: validate -> extract -> render -> write,
//! recording every outcome in the run report. Per-file failures are
//! reported, never propagated; the run always completes and prints
//! its report.

use std::fs;
use std::time::Instant;

use anyhow::Context;

use stubgen::cli::GenerateArgs;
use stubgen::console::Console;
use stubgen::extract;
use stubgen::paths;
use stubgen::render;
use stubgen::report::RunReport;
use stubgen::syntax::PhpLint;
use stubgen::validate;

/// Run the generate command for one source file.
pub fn run(args: &GenerateArgs) -> anyhow::Result<()> {
    let started = Instant::now();
    let mut console = Console::stdout(args.color.resolve(args.no_color), args.quiet);
    let mut report = RunReport::new();

    let cleaned = paths::clean_input_path(&args.file_path);
    let source_path = args.root.join(cleaned);
    tracing::debug!("resolved source path: {}", source_path.display());

    if !source_path.exists() {
        report.error(format!(
            "No source to generate tests for: {}",
            args.file_path
        ));
        return finish(&report, &mut console, None);
    }
    report.source_seen();

    let content = match validate::validate(&source_path, &PhpLint) {
        Ok(content) => content,
        Err(e) => {
            report.error(e.to_string());
            return finish(&report, &mut console, None);
        }
    };

    let Some(info) = extract::extract_class_info(&content, &source_path) else {
        report.error(format!(
            "Unable to extract class information from the file: {}",
            source_path.display()
        ));
        return finish(&report, &mut console, None);
    };

    let methods = extract::extract_method_names(&content);
    tracing::debug!(
        "extracted class {} with {} method(s)",
        info.class_name,
        methods.len()
    );
    let test_code = render::render(&info.namespace, &info.class_name, &methods);

    match paths::test_file_path(&args.root, &info.class_name) {
        Ok(test_path) => match fs::write(&test_path, &test_code) {
            Ok(()) => {
                // Success only once the file is verified on disk.
                if test_path.exists() {
                    tracing::debug!("wrote {}", test_path.display());
                    report.success();
                }
            }
            Err(e) => {
                tracing::warn!("write failed for {}: {e}", test_path.display());
                report.warning(format!(
                    "Test file path or generated test code is invalid for class: {}",
                    info.class_name
                ));
            }
        },
        Err(e) => {
            tracing::warn!("test directory creation failed: {e}");
            report.warning(format!(
                "Test file path or generated test code is invalid for class: {}",
                info.class_name
            ));
        }
    }

    finish(&report, &mut console, Some(started.elapsed().as_secs_f64()))
}

fn finish(report: &RunReport, console: &mut Console, elapsed: Option<f64>) -> anyhow::Result<()> {
    report
        .render(console, elapsed)
        .context("failed to write run report")
}
