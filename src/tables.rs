use std::fmt::Display;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use enumset::EnumSet;
use itertools::Itertools;

use crate::{
    core::{Tier, TimeBucket},
    quantity::cost::Cost,
    report::BillReport,
    tariff::Tariff,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn section(title: &str) -> Vec<Cell> {
    vec![Cell::new(title).add_attribute(Attribute::Bold), Cell::new("")]
}

fn row(label: impl Display, value: impl Display) -> Vec<Cell> {
    vec![Cell::new(label), Cell::new(value).set_alignment(CellAlignment::Right)]
}

#[must_use]
pub fn build_summary_table(report: &BillReport) -> Table {
    let bill = report.bill;
    let mut table = new_table();
    table.set_header(vec!["PG&E TOU-C Bill Calculation", ""]);
    table
        .add_row(section("Account Information"))
        .add_row(row("Climate Zone", report.climate_zone))
        .add_row(row("Billing Period", format!("{} to {}", report.start_date, report.end_date)))
        .add_row(row("Days in Billing", report.days_in_billing))
        .add_row(row("Season", bill.season))
        .add_row(section("Consumption Summary"));
    for time_bucket in EnumSet::<TimeBucket>::all() {
        table.add_row(row(time_bucket, bill.consumption.get(time_bucket)));
    }
    table
        .add_row(row("Total", bill.consumption.total))
        .add_row(section("Baseline Information"))
        .add_row(row("Baseline Allowance", bill.baseline_allowance))
        .add_row(section("Tier Usage"));
    for tier in EnumSet::<Tier>::all() {
        table.add_row(row(tier, bill.tier_usage.get(tier)));
    }
    table
        .add_row(section("Bill Summary"))
        .add_row(row("Energy Charges", bill.energy_charges().round_to_cents()))
        .add_row(row("Monthly Service Fee", bill.monthly_service_fee.round_to_cents()))
        .add_row(vec![
            Cell::new("Total Bill").add_attribute(Attribute::Bold),
            Cell::new(bill.total_bill.round_to_cents())
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
        ]);
    table
}

#[must_use]
pub fn build_slices_table(report: &BillReport) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time period", "Tier", "Usage", "Rate", "Cost"]);
    for slice in &report.bill.slices {
        table.add_row(vec![
            Cell::new(slice.time_bucket).fg(match slice.time_bucket {
                TimeBucket::OnPeak => Color::Red,
                TimeBucket::OffPeak => Color::Green,
            }),
            Cell::new(slice.tier),
            Cell::new(slice.usage).set_alignment(CellAlignment::Right),
            Cell::new(slice.rate).set_alignment(CellAlignment::Right),
            Cell::new(slice.cost.round_to_cents()).set_alignment(CellAlignment::Right),
        ]);
    }
    let total = report.bill.slices.iter().map(|slice| slice.cost).sum::<Cost>();
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(report.bill.consumption.total).set_alignment(CellAlignment::Right),
        Cell::new(""),
        Cell::new(total.round_to_cents()).set_alignment(CellAlignment::Right),
    ]);
    table
}

#[must_use]
pub fn build_rates_table(tariff: &Tariff) -> Table {
    let mut table = new_table();
    table.set_header(
        ["Time period".to_string()]
            .into_iter()
            .chain(EnumSet::<Tier>::all().iter().map(|tier| tier.to_string()))
            .collect_vec(),
    );
    for time_bucket in EnumSet::<TimeBucket>::all() {
        let mut cells = vec![Cell::new(time_bucket)];
        cells.extend(
            EnumSet::<Tier>::all().iter().map(|tier| {
                Cell::new(tariff.rates.get(time_bucket, tier)).set_alignment(CellAlignment::Right)
            }),
        );
        table.add_row(cells);
    }
    table
}

#[must_use]
pub fn build_baseline_table(tariff: &Tariff) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Climate zone", "Summer, kWh/day", "Winter, kWh/day"]);
    for (zone, allowance) in tariff.baseline.iter() {
        table.add_row(vec![
            Cell::new(zone),
            Cell::new(allowance.summer.0).set_alignment(CellAlignment::Right),
            Cell::new(allowance.winter.0).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn format_holidays(tariff: &Tariff) -> String {
    tariff.holidays.iter().join(", ")
}
