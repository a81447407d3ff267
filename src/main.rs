//! kargs CLI - reconcile kernel boot arguments with grubby.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kargs::cli::Cli;
use kargs::grubby::Grubby;
use kargs::run::{run, RunOutcome, RunRequest};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = execute(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Initialize tracing subscriber with environment filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn execute(cli: &Cli) -> Result<()> {
    let grubby = Grubby::locate().context("grubby is required but was not found")?;

    let request = RunRequest {
        args: cli.args.clone(),
        state: cli.state.into(),
        kernel_path: cli.selector(),
        check_mode: cli.check,
    };

    let outcome = run(&grubby, &request)?;
    render(cli, &outcome)
}

fn render(cli: &Cli, outcome: &RunOutcome) -> Result<()> {
    if cli.json {
        println!(
            "{}",
            serde_json::to_string(outcome).context("failed to serialize outcome")?
        );
        return Ok(());
    }

    let prefix = if cli.check { "would " } else { "" };
    if !outcome.changed {
        println!("nothing to do: boot entries already converged");
        return Ok(());
    }
    if !outcome.args_added.is_empty() {
        println!("{prefix}added: {}", outcome.args_added.join(" "));
    }
    if !outcome.args_removed.is_empty() {
        println!("{prefix}removed: {}", outcome.args_removed.join(" "));
    }
    Ok(())
}
