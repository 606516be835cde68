use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::{
    core::{BillingError, Season},
    quantity::energy::KilowattHours,
    tariff::ClimateZone,
};

/// Daily baseline allowance per season.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeasonalAllowance {
    pub summer: KilowattHours,
    pub winter: KilowattHours,
}

impl SeasonalAllowance {
    pub const fn get(&self, season: Season) -> KilowattHours {
        match season {
            Season::Summer => self.summer,
            Season::Winter => self.winter,
        }
    }
}

#[must_use]
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaselineTable(
    #[serde_as(as = "BTreeMap<DisplayFromStr, _>")] BTreeMap<ClimateZone, SeasonalAllowance>,
);

impl BaselineTable {
    /// Daily allowance of the zone in the season.
    pub fn daily(&self, zone: ClimateZone, season: Season) -> Result<KilowattHours, BillingError> {
        self.get(zone).map(|allowance| allowance.get(season))
    }

    pub fn get(&self, zone: ClimateZone) -> Result<&SeasonalAllowance, BillingError> {
        self.0.get(&zone).ok_or_else(|| BillingError::InvalidZone(zone.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClimateZone, &SeasonalAllowance)> {
        self.0.iter().map(|(zone, allowance)| (*zone, allowance))
    }
}

impl FromIterator<(ClimateZone, SeasonalAllowance)> for BaselineTable {
    fn from_iter<T: IntoIterator<Item = (ClimateZone, SeasonalAllowance)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Default for BaselineTable {
    /// PG&E baseline quantities, kWh per day.
    fn default() -> Self {
        [
            (ClimateZone::P, 15.8, 12.9),
            (ClimateZone::Q, 7.7, 10.9),
            (ClimateZone::R, 18.9, 11.7),
            (ClimateZone::S, 15.8, 12.0),
            (ClimateZone::T, 7.6, 9.7),
            (ClimateZone::V, 8.3, 9.8),
            (ClimateZone::W, 20.9, 13.7),
            (ClimateZone::X, 11.2, 11.3),
            (ClimateZone::Y, 11.9, 12.6),
            (ClimateZone::Z, 7.9, 10.4),
        ]
        .into_iter()
        .map(|(zone, summer, winter)| {
            (
                zone,
                SeasonalAllowance {
                    summer: KilowattHours::from(summer),
                    winter: KilowattHours::from(winter),
                },
            )
        })
        .collect()
    }
}
