use std::fs::File;

use anyhow::{Context, Result, bail};
use bank_ledger::{
    bin_utils::{Report, Service},
    ledger::LedgerError,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let filename = args
        .next()
        .context("Expected a file name as the first argument")?;
    let report = match args.next().as_deref() {
        None | Some("customers") => Report::Customers,
        Some("history") => Report::History,
        Some(other) => bail!("Unknown report `{other}`, expected `customers` or `history`"),
    };
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        report,
        error_printer: Box::new(|line, err| match err {
            LedgerError::CommandErr(err) => eprintln!("Error at line {line}: {err}"),
            // expected outcomes of a well-formed operation
            err => warn!(line, %err, "operation rejected"),
        }),
    };
    service.run()
}
