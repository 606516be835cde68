mod baseline;
mod rates;
mod zone;

use std::{collections::BTreeSet, fmt::Debug, fs, path::Path};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use self::{
    baseline::BaselineTable,
    rates::RateTable,
    zone::ClimateZone,
};
use crate::{prelude::*, quantity::cost::Cost};

/// Immutable rate and allowance tables of a rate plan.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    #[serde(rename = "monthly_service_fee_dollars")]
    pub monthly_service_fee: Cost,

    /// Dates which are off-peak all day.
    #[serde(default)]
    pub holidays: BTreeSet<NaiveDate>,

    pub rates: RateTable,

    pub baseline: BaselineTable,
}

impl Default for Tariff {
    /// PG&E TOU-C, 2025.
    fn default() -> Self {
        let holidays = [(1, 1), (2, 17), (5, 26), (7, 4), (9, 1), (11, 11), (11, 27), (12, 25)]
            .into_iter()
            .filter_map(|(month, day)| NaiveDate::from_ymd_opt(2025, month, day))
            .collect();
        Self {
            monthly_service_fee: Cost::from(10.0),
            holidays,
            rates: RateTable::default(),
            baseline: BaselineTable::default(),
        }
    }
}

impl Tariff {
    #[instrument(name = "Reading the tariff…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let tariff: Self =
            toml::from_str(&text).with_context(|| format!("failed to parse `{}`", path.display()))?;
        info!(
            n_holidays = tariff.holidays.len(),
            n_zones = tariff.baseline.iter().count(),
            "loaded the tariff",
        );
        Ok(tariff)
    }

    /// Read the tariff from the file, if any, or fall back to the built-in one.
    pub fn read_or_default<P: AsRef<Path> + Debug>(path: Option<P>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::read_from)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }
}
