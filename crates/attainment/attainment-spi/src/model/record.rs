//! Grid records.

use super::{Category, MinDegree, Sex};
use crate::error::{AttainmentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A percentage in [0, 100], or `None` when the source had no value.
pub type Percent = Option<f64>;

/// Composite key of the attainment grid.
///
/// Ordering is year first, then sex, then degree, each in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    pub year: i32,
    pub sex: Sex,
    pub min_degree: MinDegree,
}

impl RecordKey {
    pub fn new(year: i32, sex: Sex, min_degree: MinDegree) -> Self {
        Self {
            year,
            sex,
            min_degree,
        }
    }

    /// The (sex, degree) partition this key belongs to.
    pub fn partition(&self) -> (Sex, MinDegree) {
        (self.sex, self.min_degree)
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.year, self.sex.code(), self.min_degree)
    }
}

/// One row of the grid: a key plus one percentage per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttainmentRecord {
    pub key: RecordKey,
    values: [Percent; Category::COUNT],
}

impl AttainmentRecord {
    /// Record with every category missing.
    pub fn new(key: RecordKey) -> Self {
        Self {
            key,
            values: [None; Category::COUNT],
        }
    }

    /// Builder-style setter.
    pub fn with_value(mut self, category: Category, value: Percent) -> Self {
        self.set(category, value);
        self
    }

    pub fn year(&self) -> i32 {
        self.key.year
    }

    pub fn sex(&self) -> Sex {
        self.key.sex
    }

    pub fn min_degree(&self) -> MinDegree {
        self.key.min_degree
    }

    pub fn get(&self, category: Category) -> Percent {
        self.values[category.index()]
    }

    pub fn set(&mut self, category: Category, value: Percent) {
        self.values[category.index()] = value;
    }

    /// `(category, value)` pairs in column order.
    pub fn values(&self) -> impl Iterator<Item = (Category, Percent)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    /// Check that every present value is a finite percentage.
    pub fn validate(&self) -> Result<()> {
        for (category, value) in self.values() {
            if let Some(v) = value {
                if !v.is_finite() || !(0.0..=100.0).contains(&v) {
                    return Err(AttainmentError::parse(format!(
                        "{} value {} for {} is outside [0, 100]",
                        category, v, self.key
                    )));
                }
            }
        }
        Ok(())
    }
}
