use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Season {
    /// June through September.
    Summer,

    /// October through May.
    Winter,
}

impl Season {
    pub fn of(date: NaiveDate) -> Self {
        if (6..=9).contains(&date.month()) { Self::Summer } else { Self::Winter }
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summer => write!(f, "summer"),
            Self::Winter => write!(f, "winter"),
        }
    }
}

/// Season that drives the rate adjustment of a whole billing period.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingSeason {
    Summer,
    Winter,

    /// The period starts and ends in different seasons.
    Mixed,
}

impl BillingSeason {
    /// Winter rates are discounted by 20% of the base rates.
    pub const WINTER_RATE_MULTIPLIER: f64 = 0.8;

    /// Multiplier applied to the base rates.
    ///
    /// Mixed periods are charged at the full base rates, no pro-rating.
    pub const fn rate_multiplier(self) -> f64 {
        match self {
            Self::Winter => Self::WINTER_RATE_MULTIPLIER,
            Self::Summer | Self::Mixed => 1.0,
        }
    }
}

impl From<Season> for BillingSeason {
    fn from(season: Season) -> Self {
        match season {
            Season::Summer => Self::Summer,
            Season::Winter => Self::Winter,
        }
    }
}

impl Display for BillingSeason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summer => write!(f, "summer"),
            Self::Winter => write!(f, "winter"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}
