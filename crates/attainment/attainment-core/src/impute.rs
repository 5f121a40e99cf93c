//! Forward-fill imputation.

use crate::dataset::Dataset;
use attainment_spi::{AttainmentRecord, Category, DatasetStage, Imputer, Percent};

/// Carries the last observed value of each column forward within a series.
///
/// Leading gaps have nothing to borrow from and stay missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardFill;

impl Imputer for ForwardFill {
    fn name(&self) -> &str {
        "forward-fill"
    }

    fn fill_partition(&self, records: &mut [AttainmentRecord]) -> usize {
        let mut last_seen: [Percent; Category::COUNT] = [None; Category::COUNT];
        let mut filled = 0;

        for record in records.iter_mut() {
            for category in Category::ALL {
                let slot = &mut last_seen[category.index()];
                match record.get(category) {
                    Some(value) => *slot = Some(value),
                    None => {
                        if let Some(previous) = *slot {
                            record.set(category, Some(previous));
                            filled += 1;
                        }
                    }
                }
            }
        }

        filled
    }
}

/// Forward-fill every (sex, degree) series of `raw`.
pub fn impute(raw: &Dataset) -> Dataset {
    impute_with(raw, &ForwardFill)
}

/// Impute with a custom strategy. The input dataset is left untouched.
pub fn impute_with(raw: &Dataset, imputer: &dyn Imputer) -> Dataset {
    let (imputed, filled) =
        raw.map_partitions(DatasetStage::Imputed, |series| imputer.fill_partition(series));

    tracing::info!(
        strategy = imputer.name(),
        filled,
        remaining = imputed.missing_count(),
        "imputation complete"
    );
    imputed
}
