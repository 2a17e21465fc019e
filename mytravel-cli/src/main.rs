//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use mytravel_cli::CliError;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    match mytravel_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("mytravel: {err}");
            std::process::exit(1);
        }
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG`, defaulting to
/// warnings. Library crates log through `log`; the subscriber picks those
/// records up as well.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
