use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{core::TimeBucket, quantity::energy::KilowattHours, tariff::Tariff};

/// Energy consumed during the interval starting at the timestamp.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UsageReading {
    pub timestamp: NaiveDateTime,
    pub usage: KilowattHours,
}

impl UsageReading {
    pub const fn new(timestamp: NaiveDateTime, usage: KilowattHours) -> Self {
        Self { timestamp, usage }
    }

    pub fn classify(self, tariff: &Tariff) -> ClassifiedReading {
        ClassifiedReading { time_bucket: TimeBucket::of(self.timestamp, tariff), reading: self }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClassifiedReading {
    pub reading: UsageReading,
    pub time_bucket: TimeBucket,
}

/// Consumption summary by time bucket.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct Consumption {
    pub on_peak: KilowattHours,
    pub off_peak: KilowattHours,
    pub total: KilowattHours,
}

impl Consumption {
    pub fn new(on_peak: KilowattHours, off_peak: KilowattHours) -> Self {
        Self { on_peak, off_peak, total: on_peak + off_peak }
    }

    pub const fn get(&self, time_bucket: TimeBucket) -> KilowattHours {
        match time_bucket {
            TimeBucket::OnPeak => self.on_peak,
            TimeBucket::OffPeak => self.off_peak,
        }
    }
}

impl FromIterator<ClassifiedReading> for Consumption {
    fn from_iter<T: IntoIterator<Item = ClassifiedReading>>(iter: T) -> Self {
        let (on_peak, off_peak) = iter.into_iter().fold(
            (KilowattHours::ZERO, KilowattHours::ZERO),
            |(on_peak, off_peak), classified| match classified.time_bucket {
                TimeBucket::OnPeak => (on_peak + classified.reading.usage, off_peak),
                TimeBucket::OffPeak => (on_peak, off_peak + classified.reading.usage),
            },
        );
        Self::new(on_peak, off_peak)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    use super::*;

    fn reading(day: u32, hour: u32, usage: f64) -> UsageReading {
        UsageReading::new(
            NaiveDate::from_ymd_opt(2025, 2, day).unwrap().and_hms_opt(hour, 0, 0).unwrap(),
            KilowattHours::from(usage),
        )
    }

    #[test]
    fn test_classify() {
        let tariff = Tariff::default();
        assert_eq!(reading(3, 17, 1.0).classify(&tariff).time_bucket, TimeBucket::OnPeak);
        assert_eq!(reading(3, 9, 1.0).classify(&tariff).time_bucket, TimeBucket::OffPeak);

        // Presidents' Day.
        assert_eq!(reading(17, 17, 1.0).classify(&tariff).time_bucket, TimeBucket::OffPeak);
    }

    #[test]
    fn test_consumption_from_readings() {
        let tariff = Tariff::default();
        let consumption = [
            reading(3, 16, 2.0),
            reading(3, 20, 1.5),
            reading(3, 21, 0.5),
            reading(3, 3, 0.25),
            reading(17, 18, 4.0),
        ]
        .into_iter()
        .map(|reading| reading.classify(&tariff))
        .collect::<Consumption>();
        assert_abs_diff_eq!(consumption.on_peak.0, 3.5);
        assert_abs_diff_eq!(consumption.off_peak.0, 4.75);
        assert_abs_diff_eq!(consumption.total.0, 8.25);
    }

    #[test]
    fn test_empty_consumption() {
        let consumption = std::iter::empty::<ClassifiedReading>().collect::<Consumption>();
        assert_eq!(consumption, Consumption::default());
        assert_abs_diff_eq!(consumption.total.0, 0.0);
    }
}
