use serde::Serialize;

use crate::{
    core::{BillingSeason, Consumption, Tier, TierUsage, TimeBucket},
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
    tariff::RateTable,
};

/// Usage of one time bucket within one tier, and its price.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct PricedSlice {
    pub time_bucket: TimeBucket,
    pub tier: Tier,
    pub usage: KilowattHours,

    /// Season-adjusted rate.
    pub rate: KilowattHourRate,

    pub cost: Cost,
}

impl PricedSlice {
    fn new(
        time_bucket: TimeBucket,
        tier: Tier,
        usage: KilowattHours,
        rates: &RateTable,
        season: BillingSeason,
    ) -> Self {
        let rate = rates.get(time_bucket, tier) * season.rate_multiplier();
        Self { time_bucket, tier, usage, rate, cost: usage * rate }
    }
}

/// Allocate the bucket usage over the tiers and price every slice.
///
/// On-peak usage takes the tier capacity first, off-peak usage gets what remains of it.
/// The usage that does not fit into tiers 1 and 2 is charged at the tier 3 rates.
pub fn price_slices(
    consumption: &Consumption,
    tier_usage: &TierUsage,
    season: BillingSeason,
    rates: &RateTable,
) -> [PricedSlice; 6] {
    let on_peak = allocate(consumption.on_peak, tier_usage.tier1, tier_usage.tier2);
    let off_peak = allocate(
        consumption.off_peak,
        (tier_usage.tier1 - on_peak[0]).max(KilowattHours::ZERO),
        (tier_usage.tier2 - on_peak[1]).max(KilowattHours::ZERO),
    );
    let slice = |time_bucket, tier, usage| PricedSlice::new(time_bucket, tier, usage, rates, season);
    [
        slice(TimeBucket::OnPeak, Tier::Tier1, on_peak[0]),
        slice(TimeBucket::OnPeak, Tier::Tier2, on_peak[1]),
        slice(TimeBucket::OnPeak, Tier::Tier3, on_peak[2]),
        slice(TimeBucket::OffPeak, Tier::Tier1, off_peak[0]),
        slice(TimeBucket::OffPeak, Tier::Tier2, off_peak[1]),
        slice(TimeBucket::OffPeak, Tier::Tier3, off_peak[2]),
    ]
}

/// Fill the tier 1 and tier 2 capacities in order, the rest goes to tier 3.
fn allocate(
    usage: KilowattHours,
    tier1_capacity: KilowattHours,
    tier2_capacity: KilowattHours,
) -> [KilowattHours; 3] {
    let tier1 = usage.min(tier1_capacity);
    let remaining = usage - tier1;
    let tier2 = remaining.min(tier2_capacity);
    [tier1, tier2, remaining - tier2]
}
