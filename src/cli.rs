use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::{core::BillingPeriod, prelude::*, tariff::ClimateZone};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: calculate the bill for the usage file.
    #[clap(name = "calculate")]
    Calculate(Box<CalculateArgs>),

    /// Generate a sample hourly usage file.
    #[clap(name = "sample")]
    Sample(SampleArgs),

    /// Print the effective rate plan.
    #[clap(name = "tariff")]
    Tariff(TariffArgs),
}

#[derive(Parser)]
pub struct TariffArgs {
    /// TOML file overriding the built-in PG&E TOU-C tariff.
    #[clap(long = "tariff-file", env = "TARIFF_FILE")]
    pub path: Option<PathBuf>,
}

#[derive(Copy, Clone, Parser)]
pub struct PeriodArgs {
    /// First day of the billing period, inclusive.
    #[clap(long = "start-date", default_value = "2025-02-01", env = "START_DATE")]
    pub start: NaiveDate,

    /// Last day of the billing period, inclusive.
    #[clap(long = "end-date", default_value = "2025-02-28", env = "END_DATE")]
    pub end: NaiveDate,
}

impl PeriodArgs {
    pub fn try_into_period(self) -> Result<BillingPeriod> {
        Ok(BillingPeriod::try_new(self.start, self.end)?)
    }
}

#[derive(Parser)]
pub struct CalculateArgs {
    /// Green Button usage file: CSV with the `timestamp` and `usage` columns.
    #[clap(long = "usage-file", env = "USAGE_FILE")]
    pub usage_file: PathBuf,

    #[clap(long = "climate-zone", default_value = "X", env = "CLIMATE_ZONE")]
    pub climate_zone: ClimateZone,

    #[clap(flatten)]
    pub period: PeriodArgs,

    #[clap(flatten)]
    pub tariff: TariffArgs,

    /// Save the bill as JSON (`.json`) or TOML (any other extension).
    #[clap(long = "report", env = "REPORT_FILE")]
    pub report_file: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SampleArgs {
    #[clap(long = "output", default_value = "sample_gbd.csv", env = "SAMPLE_FILE")]
    pub output_file: PathBuf,

    #[clap(flatten)]
    pub period: PeriodArgs,
}
