mod baseline;
mod bill;
mod error;
mod period;
mod pricing;
mod reading;
mod season;
mod tiers;
mod time_bucket;

pub use self::{
    baseline::baseline_allowance,
    bill::BillResult,
    error::BillingError,
    period::BillingPeriod,
    pricing::{PricedSlice, price_slices},
    reading::{Consumption, UsageReading},
    season::{BillingSeason, Season},
    tiers::{Tier, TierUsage},
    time_bucket::{PEAK_HOURS, TimeBucket},
};
use crate::{
    prelude::*,
    tariff::{ClimateZone, Tariff},
};

/// Calculate the bill of the billing period from the raw usage readings.
///
/// Readings dated outside the period are ignored.
/// No readings at all is a valid input and yields just the service fee.
#[instrument(skip_all, fields(zone = %zone, period = %period))]
pub fn calculate_bill<'a>(
    tariff: &Tariff,
    readings: impl IntoIterator<Item = &'a UsageReading>,
    zone: ClimateZone,
    period: &BillingPeriod,
) -> Result<BillResult, BillingError> {
    let baseline_allowance = baseline_allowance(&tariff.baseline, zone, period)?;

    let mut n_ignored = 0_usize;
    let consumption = readings
        .into_iter()
        .filter(|reading| {
            let is_inside = period.contains(reading.timestamp.date());
            if !is_inside {
                n_ignored += 1;
            }
            is_inside
        })
        .map(|reading| reading.classify(tariff))
        .collect::<Consumption>();
    if n_ignored != 0 {
        debug!(n_ignored, "ignored readings outside the billing period");
    }
    debug!(
        on_peak = ?consumption.on_peak,
        off_peak = ?consumption.off_peak,
        total = ?consumption.total,
        "summarized consumption",
    );

    let tier_usage = TierUsage::split(consumption.total, baseline_allowance);
    debug!(
        tier1 = ?tier_usage.tier1,
        tier2 = ?tier_usage.tier2,
        tier3 = ?tier_usage.tier3,
        total = ?tier_usage.total(),
        "split into tiers",
    );
    let season = period.billing_season();
    let slices = price_slices(&consumption, &tier_usage, season, &tariff.rates);
    let bill = BillResult::builder()
        .consumption(consumption)
        .baseline_allowance(baseline_allowance)
        .tier_usage(tier_usage)
        .season(season)
        .slices(slices)
        .monthly_service_fee(tariff.monthly_service_fee)
        .build();
    info!(total_bill = ?bill.total_bill, %season, "calculated the bill");
    Ok(bill)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    use super::*;
    use crate::quantity::{cost::Cost, energy::KilowattHours};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn at(date: NaiveDate, hour: u32) -> NaiveDateTime {
        date.and_hms_opt(hour, 0, 0).unwrap()
    }

    fn february_2025() -> BillingPeriod {
        BillingPeriod::try_new(date(2025, 2, 1), date(2025, 2, 28)).unwrap()
    }

    /// 600 kWh spread over the off-peak hours of February.
    fn off_peak_february_readings() -> Vec<UsageReading> {
        let tariff = Tariff::default();
        let timestamps = (0..28)
            .map(|day| date(2025, 2, 1) + TimeDelta::days(day))
            .flat_map(|day| (0..24).map(move |hour| at(day, hour)))
            .filter(|timestamp| TimeBucket::of(*timestamp, &tariff) == TimeBucket::OffPeak)
            .collect::<Vec<_>>();
        #[expect(clippy::cast_precision_loss)]
        let usage = KilowattHours::from(600.0 / timestamps.len() as f64);
        timestamps.into_iter().map(|timestamp| UsageReading::new(timestamp, usage)).collect()
    }

    #[test]
    fn test_off_peak_february_in_zone_x() {
        let readings = off_peak_february_readings();
        let bill =
            calculate_bill(&Tariff::default(), &readings, ClimateZone::X, &february_2025()).unwrap();

        assert_abs_diff_eq!(bill.consumption.on_peak.0, 0.0);
        assert_abs_diff_eq!(bill.consumption.off_peak.0, 600.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bill.consumption.total.0, 600.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bill.baseline_allowance.0, 316.4, epsilon = 1e-9);
        assert_abs_diff_eq!(bill.tier_usage.tier1.0, 316.4, epsilon = 1e-9);
        assert_abs_diff_eq!(bill.tier_usage.tier2.0, 94.92, epsilon = 1e-9);
        assert_abs_diff_eq!(bill.tier_usage.tier3.0, 188.68, epsilon = 1e-9);
        assert_eq!(bill.season, BillingSeason::Winter);
        assert_abs_diff_eq!(bill.monthly_service_fee.0, 10.0);

        // 316.4 × 0.256 + 94.92 × 0.336 + 188.68 × 0.416 + 10.00
        assert_abs_diff_eq!(bill.total_bill.0, 201.3824, epsilon = 1e-9);
        assert_abs_diff_eq!(bill.energy_charges().0, 191.3824, epsilon = 1e-9);
    }

    #[test]
    fn test_bill_invariants() {
        let tariff = Tariff::default();
        let readings = (0..24 * 30_u32)
            .map(|hour| {
                let timestamp = at(date(2025, 5, 20), 0) + TimeDelta::hours(i64::from(hour));
                UsageReading::new(timestamp, KilowattHours::from(0.4 + f64::from(hour % 7) * 0.3))
            })
            .collect::<Vec<_>>();
        let period = BillingPeriod::try_new(date(2025, 5, 20), date(2025, 6, 18)).unwrap();
        let bill = calculate_bill(&tariff, &readings, ClimateZone::S, &period).unwrap();

        assert_eq!(bill.season, BillingSeason::Mixed);
        assert_abs_diff_eq!(bill.baseline_allowance.0, 12.0 * 12.0 + 15.8 * 18.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bill.tier_usage.total().0, bill.consumption.total.0, epsilon = 1e-9);
        let sliced = bill.slices.iter().map(|slice| slice.usage).sum::<KilowattHours>();
        assert_abs_diff_eq!(sliced.0, bill.consumption.total.0, epsilon = 1e-9);
        let priced = bill.slices.iter().map(|slice| slice.cost).sum::<Cost>();
        assert_abs_diff_eq!(bill.total_bill.0, priced.0 + bill.monthly_service_fee.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_readings() {
        let tariff = Tariff::default();
        let bill = calculate_bill(&tariff, &[] as &[UsageReading], ClimateZone::X, &february_2025())
            .unwrap();
        assert_eq!(bill.tier_usage, TierUsage::default());
        assert_eq!(bill.total_bill, tariff.monthly_service_fee);
    }

    #[test]
    fn test_ignores_readings_outside_period() {
        let tariff = Tariff::default();
        let readings = [
            UsageReading::new(at(date(2025, 1, 31), 17), KilowattHours::from(50.0)),
            UsageReading::new(at(date(2025, 2, 1), 0), KilowattHours::from(1.0)),
            UsageReading::new(at(date(2025, 2, 28), 23), KilowattHours::from(2.0)),
            UsageReading::new(at(date(2025, 3, 1), 0), KilowattHours::from(70.0)),
        ];
        let bill = calculate_bill(&tariff, &readings, ClimateZone::X, &february_2025()).unwrap();
        assert_abs_diff_eq!(bill.consumption.total.0, 3.0);
    }

    #[test]
    fn test_idempotent() {
        let tariff = Tariff::default();
        let readings = off_peak_february_readings();
        let first = calculate_bill(&tariff, &readings, ClimateZone::T, &february_2025()).unwrap();
        let second = calculate_bill(&tariff, &readings, ClimateZone::T, &february_2025()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.total_bill.0.to_bits(), second.total_bill.0.to_bits());
    }

    #[test]
    fn test_zone_missing_from_tariff() {
        let tariff = Tariff { baseline: std::iter::empty().collect(), ..Tariff::default() };
        assert!(matches!(
            calculate_bill(&tariff, &[] as &[UsageReading], ClimateZone::X, &february_2025()),
            Err(BillingError::InvalidZone(_)),
        ));
    }

    #[test]
    fn test_custom_tariff_is_isolated() {
        let mut tariff = Tariff::default();
        tariff.monthly_service_fee = Cost::from(0.0);
        tariff.rates.off_peak.tier1 = crate::quantity::rate::KilowattHourRate::from(1.0);
        let readings = [UsageReading::new(at(date(2025, 7, 8), 3), KilowattHours::from(10.0))];
        let period = BillingPeriod::try_new(date(2025, 7, 1), date(2025, 7, 31)).unwrap();

        let custom = calculate_bill(&tariff, &readings, ClimateZone::X, &period).unwrap();
        assert_abs_diff_eq!(custom.total_bill.0, 10.0, epsilon = 1e-9);

        let default = calculate_bill(&Tariff::default(), &readings, ClimateZone::X, &period).unwrap();
        assert_abs_diff_eq!(default.total_bill.0, 10.0 * 0.32 + 10.0, epsilon = 1e-9);
    }
}
