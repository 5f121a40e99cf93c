//! Selectors for slicing the attainment grid.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::{RangeFrom, RangeFull, RangeInclusive, RangeToInclusive};

/// Picks one, several or every value of a key dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector<T: Ord> {
    All,
    One(T),
    Many(BTreeSet<T>),
}

impl<T: Ord> Selector<T> {
    /// Select from a list of values.
    pub fn many(values: impl IntoIterator<Item = T>) -> Self {
        Selector::Many(values.into_iter().collect())
    }

    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::One(v) => v == value,
            Selector::Many(set) => set.contains(value),
        }
    }
}

impl<T: Ord> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: Ord> From<T> for Selector<T> {
    fn from(value: T) -> Self {
        Selector::One(value)
    }
}

/// Inclusive year window; a `None` side is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct YearRange {
    pub start: Option<i32>,
    pub end: Option<i32>,
}

impl YearRange {
    pub fn new(start: Option<i32>, end: Option<i32>) -> Self {
        Self { start, end }
    }

    /// Every year.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start.map_or(true, |s| year >= s) && self.end.map_or(true, |e| year <= e)
    }
}

impl From<RangeInclusive<i32>> for YearRange {
    fn from(range: RangeInclusive<i32>) -> Self {
        Self::new(Some(*range.start()), Some(*range.end()))
    }
}

impl From<RangeFrom<i32>> for YearRange {
    fn from(range: RangeFrom<i32>) -> Self {
        Self::new(Some(range.start), None)
    }
}

impl From<RangeToInclusive<i32>> for YearRange {
    fn from(range: RangeToInclusive<i32>) -> Self {
        Self::new(None, Some(range.end))
    }
}

impl From<RangeFull> for YearRange {
    fn from(_: RangeFull) -> Self {
        Self::all()
    }
}
