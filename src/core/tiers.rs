use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::quantity::energy::KilowattHours;

/// Share of the baseline allowance, on top of the allowance itself, charged at the tier 2 rates.
pub const TIER2_BASELINE_SHARE: f64 = 0.3;

#[derive(Debug, Serialize, enumset::EnumSetType)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Up to 100% of the baseline allowance.
    Tier1,

    /// From 100% to 130% of the baseline allowance.
    Tier2,

    /// Above 130% of the baseline allowance.
    Tier3,
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tier1 => write!(f, "Tier 1 (0-100%)"),
            Self::Tier2 => write!(f, "Tier 2 (101-130%)"),
            Self::Tier3 => write!(f, "Tier 3 (>130%)"),
        }
    }
}

/// Total usage split into the pricing tiers.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct TierUsage {
    pub tier1: KilowattHours,
    pub tier2: KilowattHours,
    pub tier3: KilowattHours,
}

impl TierUsage {
    pub fn split(total: KilowattHours, baseline_allowance: KilowattHours) -> Self {
        let tier2_capacity = baseline_allowance * TIER2_BASELINE_SHARE;
        Self {
            tier1: total.min(baseline_allowance),
            tier2: (total - baseline_allowance).max(KilowattHours::ZERO).min(tier2_capacity),
            tier3: (total - baseline_allowance * (1.0 + TIER2_BASELINE_SHARE))
                .max(KilowattHours::ZERO),
        }
    }

    pub const fn get(&self, tier: Tier) -> KilowattHours {
        match tier {
            Tier::Tier1 => self.tier1,
            Tier::Tier2 => self.tier2,
            Tier::Tier3 => self.tier3,
        }
    }

    pub fn total(&self) -> KilowattHours {
        self.tier1 + self.tier2 + self.tier3
    }
}
