use crate::{
    core::{BillingError, BillingPeriod},
    prelude::*,
    quantity::energy::KilowattHours,
    tariff::{BaselineTable, ClimateZone},
};

/// Baseline allowance for the whole billing period.
///
/// Each season span is charged at its own daily allowance.
#[instrument(skip(baseline), level = Level::DEBUG, ret)]
pub fn baseline_allowance(
    baseline: &BaselineTable,
    zone: ClimateZone,
    period: &BillingPeriod,
) -> Result<KilowattHours, BillingError> {
    period
        .season_spans()?
        .into_iter()
        .map(|span| {
            #[expect(clippy::cast_precision_loss)]
            let n_days = span.n_days as f64;
            baseline.daily(zone, span.season).map(|daily| daily * n_days)
        })
        .sum()
}
