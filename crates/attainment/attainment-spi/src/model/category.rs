//! Race/ethnicity value columns.

use super::normalize_label;
use crate::error::AttainmentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Demographic column a percentage belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Total,
    White,
    Black,
    Hispanic,
    Asian,
    PacificIslander,
    AmericanIndianAlaskaNative,
    TwoOrMoreRaces,
}

impl Category {
    /// Number of value columns per record.
    pub const COUNT: usize = 8;

    /// Every category in column order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Total,
        Category::White,
        Category::Black,
        Category::Hispanic,
        Category::Asian,
        Category::PacificIslander,
        Category::AmericanIndianAlaskaNative,
        Category::TwoOrMoreRaces,
    ];

    /// Position in [`Category::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Column header as written in the source table.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Total => "Total",
            Category::White => "White",
            Category::Black => "Black",
            Category::Hispanic => "Hispanic",
            Category::Asian => "Asian",
            Category::PacificIslander => "Pacific Islander",
            Category::AmericanIndianAlaskaNative => "American Indian/Alaska Native",
            Category::TwoOrMoreRaces => "Two or more races",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = AttainmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s);
        Category::ALL
            .into_iter()
            .find(|c| normalize_label(c.label()) == wanted)
            .ok_or_else(|| AttainmentError::parse(format!("unrecognized category '{}'", s.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_parse_headers() {
        assert_eq!("Total".parse::<Category>().unwrap(), Category::Total);
        assert_eq!(
            "American Indian/Alaska Native".parse::<Category>().unwrap(),
            Category::AmericanIndianAlaskaNative
        );
        assert_eq!(
            " two or more races ".parse::<Category>().unwrap(),
            Category::TwoOrMoreRaces
        );
        assert_eq!("PacificIslander".parse::<Category>().unwrap(), Category::PacificIslander);
    }

    #[test]
    fn test_parse_unknown_header() {
        let err = "Martian".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "Parse error: unrecognized category 'Martian'");
    }
}
