use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::core::BillingError;

/// PG&E baseline territory code.
#[derive(Debug, Hash, PartialOrd, Ord, enumset::EnumSetType)]
pub enum ClimateZone {
    P,
    Q,
    R,
    S,
    T,
    V,
    W,
    X,
    Y,
    Z,
}

impl ClimateZone {
    pub const fn code(self) -> char {
        match self {
            Self::P => 'P',
            Self::Q => 'Q',
            Self::R => 'R',
            Self::S => 'S',
            Self::T => 'T',
            Self::V => 'V',
            Self::W => 'W',
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }
}

impl Display for ClimateZone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ClimateZone {
    type Err = BillingError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim() {
            "P" | "p" => Ok(Self::P),
            "Q" | "q" => Ok(Self::Q),
            "R" | "r" => Ok(Self::R),
            "S" | "s" => Ok(Self::S),
            "T" | "t" => Ok(Self::T),
            "V" | "v" => Ok(Self::V),
            "W" | "w" => Ok(Self::W),
            "X" | "x" => Ok(Self::X),
            "Y" | "y" => Ok(Self::Y),
            "Z" | "z" => Ok(Self::Z),
            _ => Err(BillingError::InvalidZone(code.to_string())),
        }
    }
}
