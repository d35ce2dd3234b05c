//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;

/// A PHPUnit scaffold generator that stubs one placeholder test per detected method
#[derive(Parser)]
#[command(name = "stubgen")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a PHPUnit test scaffold for a PHP source file
    Generate(GenerateArgs),
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to the PHP source file, relative to the project root
    /// after its first directory segment is stripped
    #[arg(value_name = "FILE_PATH")]
    pub file_path: String,

    /// Project root the cleaned path and the generated test resolve against
    #[arg(long, env = "STUBGEN_ROOT", default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Suppress the run report
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
