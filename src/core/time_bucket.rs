use std::{
    fmt::{Display, Formatter},
    ops::RangeInclusive,
};

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::tariff::Tariff;

/// Hours of the day, inclusive, charged at the on-peak rates: 16:00 through 20:59.
pub const PEAK_HOURS: RangeInclusive<u32> = 16..=20;

#[derive(Debug, Serialize, enumset::EnumSetType)]
#[serde(rename_all = "snake_case")]
pub enum TimeBucket {
    OnPeak,
    OffPeak,
}

impl TimeBucket {
    /// Classify the billing-local timestamp.
    ///
    /// Holidays are off-peak all day long.
    pub fn of(timestamp: NaiveDateTime, tariff: &Tariff) -> Self {
        if tariff.is_holiday(timestamp.date()) {
            Self::OffPeak
        } else if PEAK_HOURS.contains(&timestamp.hour()) {
            Self::OnPeak
        } else {
            Self::OffPeak
        }
    }
}

impl Display for TimeBucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnPeak => write!(f, "On-Peak"),
            Self::OffPeak => write!(f, "Off-Peak"),
        }
    }
}
