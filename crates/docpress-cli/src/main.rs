//! docpress CLI
//!
//! Publishes `README.md` to Notice.

#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;
use docpress_cli::{Args, Outcome, Reporter, run};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let reporter = Reporter::from_env(args.dry_run);
    match run(&args, &reporter).await {
        Ok(Outcome::DryRun(json)) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Published(summary)) => {
            tracing::info!(
                articles = summary.articles,
                blocks = summary.blocks,
                "Published {}",
                args.input.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            reporter.fail(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so dry-run JSON on stdout stays clean. `RUST_LOG`
/// overrides the level chosen by `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
