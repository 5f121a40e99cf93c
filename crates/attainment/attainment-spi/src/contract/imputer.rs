//! Imputation strategy trait.

use crate::model::AttainmentRecord;

/// Fills missing values inside one (sex, degree) partition.
///
/// Implementations only ever see records of a single partition, ordered by
/// year ascending, so nothing can leak across partitions.
pub trait Imputer: Send + Sync {
    /// Strategy name for logs.
    fn name(&self) -> &str;

    /// Fill missing values in place and return how many cells were filled.
    fn fill_partition(&self, records: &mut [AttainmentRecord]) -> usize;
}
