use serde::Serialize;

use crate::{
    core::{BillingSeason, Consumption, PricedSlice, TierUsage},
    quantity::{cost::Cost, energy::KilowattHours},
};

/// Itemised bill of a billing period.
///
/// Plain values go first, so that the bill serializes into TOML as is.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BillResult {
    pub season: BillingSeason,
    pub baseline_allowance: KilowattHours,
    pub monthly_service_fee: Cost,
    pub total_bill: Cost,
    pub consumption: Consumption,
    pub tier_usage: TierUsage,
    pub slices: [PricedSlice; 6],
}

#[bon::bon]
impl BillResult {
    #[builder]
    pub fn new(
        consumption: Consumption,
        baseline_allowance: KilowattHours,
        tier_usage: TierUsage,
        season: BillingSeason,
        slices: [PricedSlice; 6],
        monthly_service_fee: Cost,
    ) -> Self {
        let total_bill = slices.iter().map(|slice| slice.cost).sum::<Cost>() + monthly_service_fee;
        Self {
            season,
            baseline_allowance,
            monthly_service_fee,
            total_bill,
            consumption,
            tier_usage,
            slices,
        }
    }
}

impl BillResult {
    /// Energy charges without the service fee.
    pub fn energy_charges(&self) -> Cost {
        self.slices.iter().map(|slice| slice.cost).sum()
    }
}
