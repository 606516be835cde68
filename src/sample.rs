use chrono::{NaiveTime, TimeDelta, Timelike};

use crate::{
    core::{BillingPeriod, PEAK_HOURS, UsageReading},
    quantity::energy::KilowattHours,
};

/// Generate hourly readings over the period, heavier in the evening peak.
///
/// The profile is deterministic, so a sample file can be regenerated byte for byte.
pub fn hourly_profile(period: &BillingPeriod) -> Vec<UsageReading> {
    period
        .start()
        .iter_days()
        .take_while(|date| period.contains(*date))
        .enumerate()
        .flat_map(|(day_index, date)| {
            (0..24).map(move |hour| {
                let timestamp = date.and_time(NaiveTime::MIN) + TimeDelta::hours(hour);
                UsageReading::new(timestamp, hourly_usage(day_index, timestamp.hour()))
            })
        })
        .collect()
}

/// Peak hours draw 1.2–2.5 kWh, the rest of the day 0.3–1.0 kWh.
fn hourly_usage(day_index: usize, hour: u32) -> KilowattHours {
    #[expect(clippy::cast_possible_truncation)]
    let day = (day_index % 8) as u32;
    if PEAK_HOURS.contains(&hour) {
        KilowattHours::from(1.2 + 0.1 * f64::from((hour * 3 + day) % 14))
    } else {
        KilowattHours::from(0.3 + 0.1 * f64::from((hour * 5 + day) % 8))
    }
}
