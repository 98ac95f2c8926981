//! Splice CLI - batch construction of counterfactual reasoning traces.
//!
//! Reads line-delimited JSON records (one item per line), drives the splice
//! engine for each item, and writes the records back out with a
//! `counterfactual` field attached. Item-scoped failures are logged and
//! skipped; an unknown target option letter aborts the whole run so the
//! anomaly surfaces instead of being silently dropped.

mod args;
mod records;
mod run;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::args::CliCommand;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let command = match CliCommand::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{message}\n\n{}", args::USAGE);
            std::process::exit(2);
        }
    };

    match command {
        CliCommand::Help => {
            println!("{}", args::USAGE);
            Ok(())
        }
        CliCommand::Run(cli_args) => {
            let summary = run::run(&cli_args)?;
            tracing::info!(
                written = summary.written,
                skipped = summary.skipped,
                "run complete"
            );
            Ok(())
        }
    }
}
