//! Sex partition.

use super::normalize_label;
use crate::error::AttainmentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sub-population tracked per year and degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sex {
    /// Both sexes combined
    All,
    Male,
    Female,
}

impl Sex {
    /// Every partition in declaration order.
    pub const ALL: [Sex; 3] = [Sex::All, Sex::Male, Sex::Female];

    /// Single-letter code used by the source table.
    pub fn code(&self) -> &'static str {
        match self {
            Sex::All => "A",
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::All => "All",
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Sex {
    type Err = AttainmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "a" | "all" | "total" => Ok(Sex::All),
            "m" | "male" => Ok(Sex::Male),
            "f" | "female" => Ok(Sex::Female),
            _ => Err(AttainmentError::parse(format!("unrecognized sex '{}'", s.trim()))),
        }
    }
}
