use serde::{Deserialize, Serialize};

use crate::{
    core::{Tier, TimeBucket},
    quantity::rate::KilowattHourRate,
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub on_peak: TierRates,
    pub off_peak: TierRates,
}

impl RateTable {
    pub const fn get(&self, time_bucket: TimeBucket, tier: Tier) -> KilowattHourRate {
        match time_bucket {
            TimeBucket::OnPeak => self.on_peak.get(tier),
            TimeBucket::OffPeak => self.off_peak.get(tier),
        }
    }
}

impl Default for RateTable {
    /// PG&E TOU-C base rates, before the seasonal adjustment.
    fn default() -> Self {
        Self {
            on_peak: TierRates {
                tier1: KilowattHourRate::from(0.45),
                tier2: KilowattHourRate::from(0.55),
                tier3: KilowattHourRate::from(0.65),
            },
            off_peak: TierRates {
                tier1: KilowattHourRate::from(0.32),
                tier2: KilowattHourRate::from(0.42),
                tier3: KilowattHourRate::from(0.52),
            },
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierRates {
    pub tier1: KilowattHourRate,
    pub tier2: KilowattHourRate,
    pub tier3: KilowattHourRate,
}

impl TierRates {
    pub const fn get(&self, tier: Tier) -> KilowattHourRate {
        match tier {
            Tier::Tier1 => self.tier1,
            Tier::Tier2 => self.tier2,
            Tier::Tier3 => self.tier3,
        }
    }
}
