use clap::Parser;

use stubgen::cli::{Cli, Command};

mod cmd_generate;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Generate(args) => {
            init_tracing(args.verbose);
            cmd_generate::run(args)
        }
    }
}

/// Install the tracing subscriber. `RUST_LOG` wins when set;
/// `--verbose` raises the default level to debug.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
