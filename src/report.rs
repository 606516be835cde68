use std::{fs, path::Path};

use chrono::NaiveDate;
use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::{
    core::{BillResult, BillingPeriod},
    prelude::*,
    tariff::ClimateZone,
};

/// Bill together with the account information it was calculated for.
#[must_use]
#[serde_as]
#[derive(Serialize)]
pub struct BillReport<'a> {
    #[serde_as(as = "DisplayFromStr")]
    pub climate_zone: ClimateZone,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_in_billing: i64,
    pub bill: &'a BillResult,
}

impl<'a> BillReport<'a> {
    pub fn new(climate_zone: ClimateZone, period: &BillingPeriod, bill: &'a BillResult) -> Self {
        Self {
            climate_zone,
            start_date: period.start(),
            end_date: period.end(),
            days_in_billing: period.n_days(),
            bill,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Write the report as JSON when the extension is `json`, and as TOML otherwise.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write_to(&self, path: &Path) -> Result {
        let is_json = path.extension().is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
        let text = if is_json { self.to_json()? } else { self.to_toml()? };
        fs::write(path, text).with_context(|| format!("failed to write `{}`", path.display()))?;
        info!("saved the report");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::calculate_bill, sample::hourly_profile, tariff::Tariff};

    fn february_bill() -> (BillingPeriod, BillResult) {
        let period = BillingPeriod::try_new(
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
        )
        .unwrap();
        let readings = hourly_profile(&period);
        let bill = calculate_bill(&Tariff::default(), &readings, ClimateZone::X, &period).unwrap();
        (period, bill)
    }

    #[test]
    fn test_to_json() {
        let (period, bill) = february_bill();
        let json = BillReport::new(ClimateZone::X, &period, &bill).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["climate_zone"], "X");
        assert_eq!(value["start_date"], "2025-02-01");
        assert_eq!(value["days_in_billing"], 28);
        assert_eq!(value["bill"]["season"], "winter");
        assert_eq!(value["bill"]["slices"].as_array().unwrap().len(), 6);
        assert_eq!(value["bill"]["slices"][0]["time_bucket"], "on_peak");
        assert_eq!(value["bill"]["monthly_service_fee"], 10.0);
    }

    #[test]
    fn test_to_toml() {
        let (period, bill) = february_bill();
        let text = BillReport::new(ClimateZone::X, &period, &bill).to_toml().unwrap();
        let value: toml::Table = toml::from_str(&text).unwrap();
        assert_eq!(value["climate_zone"].as_str(), Some("X"));
        assert_eq!(value["days_in_billing"].as_integer(), Some(28));
        assert_eq!(value["bill"]["tier_usage"].as_table().map(toml::Table::len), Some(3));
        assert_eq!(value["bill"]["slices"].as_array().map(Vec::len), Some(6));
    }
}
