#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod ingest;
mod prelude;
mod quantity;
mod report;
mod sample;
mod tables;
mod tariff;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, CalculateArgs, Command, SampleArgs, TariffArgs},
    core::calculate_bill,
    prelude::*,
    report::BillReport,
    tables::{build_baseline_table, build_rates_table, build_slices_table, build_summary_table},
    tariff::Tariff,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Calculate(args) => calculate(&args)?,
        Command::Sample(args) => write_sample(&args)?,
        Command::Tariff(args) => print_tariff(&args)?,
    }

    info!("done!");
    Ok(())
}

#[instrument(skip_all, fields(zone = %args.climate_zone))]
fn calculate(args: &CalculateArgs) -> Result {
    let period = args.period.try_into_period()?;
    let tariff = Tariff::read_or_default(args.tariff.path.as_ref())?;
    let readings = ingest::read_file(&args.usage_file)?;
    let bill = calculate_bill(&tariff, &readings, args.climate_zone, &period)?;

    let report = BillReport::new(args.climate_zone, &period, &bill);
    println!("{}", build_summary_table(&report));
    println!("{}", build_slices_table(&report));
    if let Some(path) = &args.report_file {
        report.write_to(path)?;
    }
    Ok(())
}

#[instrument(skip_all, fields(path = %args.output_file.display()))]
fn write_sample(args: &SampleArgs) -> Result {
    let period = args.period.try_into_period()?;
    let readings = sample::hourly_profile(&period);
    ingest::write_file(&args.output_file, &readings)
}

fn print_tariff(args: &TariffArgs) -> Result {
    let tariff = Tariff::read_or_default(args.path.as_ref())?;
    println!("Monthly service fee: {}", tariff.monthly_service_fee);
    println!("Holidays: {}", tables::format_holidays(&tariff));
    println!("{}", build_rates_table(&tariff));
    println!("{}", build_baseline_table(&tariff));
    Ok(())
}
