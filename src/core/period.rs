use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::core::{BillingError, BillingSeason, Season};

/// Billing period, both ends inclusive.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BillingPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

/// Part of a billing period that falls into a single season.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SeasonSpan {
    pub season: Season,
    pub n_days: i64,
}

impl BillingPeriod {
    pub fn try_new(start: NaiveDate, end: NaiveDate) -> Result<Self, BillingError> {
        if end < start {
            return Err(BillingError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days, counting both ends.
    pub fn n_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    pub fn billing_season(&self) -> BillingSeason {
        let start_season = Season::of(self.start);
        if start_season == Season::of(self.end) {
            start_season.into()
        } else {
            BillingSeason::Mixed
        }
    }

    /// Split the period by the season transition.
    ///
    /// Only the endpoints are inspected: a period that starts and ends in the same season
    /// is a single span even when it contains two transitions.
    /// The transition is June 1st when the period starts before June and ends in June or later,
    /// and October 1st otherwise, always of the starting year.
    pub fn season_spans(&self) -> Result<Vec<SeasonSpan>, BillingError> {
        let (start_season, end_season) = (Season::of(self.start), Season::of(self.end));
        if start_season == end_season {
            return Ok(vec![SeasonSpan { season: start_season, n_days: self.n_days() }]);
        }

        let transition_month = if self.start.month() < 6 && self.end.month() >= 6 { 6 } else { 10 };
        let transition = NaiveDate::from_ymd_opt(self.start.year(), transition_month, 1)
            .filter(|transition| self.start < *transition && *transition <= self.end)
            .ok_or(BillingError::UnsupportedPeriod { start: self.start, end: self.end })?;

        Ok(vec![
            SeasonSpan { season: start_season, n_days: (transition - self.start).num_days() },
            SeasonSpan { season: end_season, n_days: (self.end - transition).num_days() + 1 },
        ])
    }
}

impl Display for BillingPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
