mod args;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use dairyops_inventory::ExpirationAnalytics;

use crate::args::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    dairyops_observability::init_with(&cli.log_config());

    let filter = cli.filter.to_filter().context("invalid filter")?;
    let (records, report) = dairyops_ingest::load_records(&cli.data)
        .with_context(|| format!("failed to load {}", cli.data.display()))?;
    if report.rows_skipped > 0 {
        tracing::warn!(skipped = report.rows_skipped, "some rows were skipped");
    }

    let analytics = ExpirationAnalytics::new(cli.loss_config());
    match cli.command {
        Command::Results => print_json(&analytics.batch_results(&records, &filter)),
        Command::Loss => print_json(&analytics.loss_series(&records, &filter)),
        Command::Stock => print_json(&analytics.stock_comparison(&records, &filter)),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("failed to encode output")?;
    writeln!(out).context("failed to write output")?;
    Ok(())
}
