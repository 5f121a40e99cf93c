//! Minimum credential threshold.

use super::normalize_label;
use crate::error::AttainmentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum educational credential a percentage refers to.
///
/// Declaration order is the canonical order for every per-degree result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MinDegree {
    HighSchool,
    Associates,
    Bachelors,
    Masters,
}

impl MinDegree {
    /// Every degree in canonical order.
    pub const ALL: [MinDegree; 4] = [
        MinDegree::HighSchool,
        MinDegree::Associates,
        MinDegree::Bachelors,
        MinDegree::Masters,
    ];

    /// Label as written in the source table.
    pub fn label(&self) -> &'static str {
        match self {
            MinDegree::HighSchool => "high school",
            MinDegree::Associates => "associate's",
            MinDegree::Bachelors => "bachelor's",
            MinDegree::Masters => "master's",
        }
    }
}

impl fmt::Display for MinDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MinDegree {
    type Err = AttainmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "highschool" => Ok(MinDegree::HighSchool),
            "associates" | "associate" => Ok(MinDegree::Associates),
            "bachelors" | "bachelor" => Ok(MinDegree::Bachelors),
            "masters" | "master" => Ok(MinDegree::Masters),
            _ => Err(AttainmentError::parse(format!(
                "unrecognized minimum degree '{}'",
                s.trim()
            ))),
        }
    }
}
