use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use dairyops_core::{Brand, DomainResult, Location, SalesChannel};
use dairyops_inventory::{LossViewConfig, RecordFilter};
use dairyops_observability::{LogConfig, LogFormat};

/// Inventory-expiration reports for the dairy dataset.
#[derive(Parser, Debug)]
#[command(name = "dairyops")]
#[command(about = "Replay dairy stock FIFO and report expired vs valid inventory")]
pub struct Cli {
    /// Path to the dataset CSV
    #[arg(short, long, env = "DAIRYOPS_DATA")]
    pub data: PathBuf,

    /// Log output format (json | pretty)
    #[arg(long, env = "DAIRYOPS_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Production years left out of the loss report
    #[arg(
        long = "exclude-year",
        env = "DAIRYOPS_EXCLUDED_YEARS",
        value_delimiter = ',',
        default_value = "2018"
    )]
    pub excluded_years: Vec<i32>,

    /// Report every year, ignoring --exclude-year
    #[arg(long, conflicts_with = "excluded_years")]
    pub no_exclusions: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Cross-filter selections; omitted means "All".
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    #[arg(long)]
    pub brand: Option<Brand>,

    /// Transaction month, 1-12
    #[arg(long)]
    pub month: Option<u32>,

    #[arg(long)]
    pub location: Option<Location>,

    #[arg(long = "channel")]
    pub sales_channel: Option<SalesChannel>,

    /// Transaction year
    #[arg(long)]
    pub year: Option<i32>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Per-batch valid/expired quantities
    Results,
    /// Monetary loss from expired stock per production year
    Loss,
    /// Summed valid vs expired stock per product
    Stock,
}

impl FilterArgs {
    pub fn to_filter(&self) -> DomainResult<RecordFilter> {
        let mut filter = RecordFilter::all();
        if let Some(brand) = &self.brand {
            filter = filter.with_brand(brand.clone());
        }
        if let Some(month) = self.month {
            filter = filter.with_month(month)?;
        }
        if let Some(location) = &self.location {
            filter = filter.with_location(location.clone());
        }
        if let Some(channel) = &self.sales_channel {
            filter = filter.with_sales_channel(channel.clone());
        }
        if let Some(year) = self.year {
            filter = filter.with_year(year);
        }
        Ok(filter)
    }
}

impl Cli {
    pub fn loss_config(&self) -> LossViewConfig {
        if self.no_exclusions {
            LossViewConfig::without_exclusions()
        } else {
            LossViewConfig::with_excluded_years(self.excluded_years.iter().copied())
        }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig::default().with_format(self.log_format)
    }
}
