//! Raw and imputed datasets kept side by side.

use crate::dataset::Dataset;
use crate::impute::{impute_with, ForwardFill};
use attainment_spi::Imputer;

/// Holds the dataset as loaded and its imputed counterpart.
///
/// The raw copy is only exposed by shared reference; queries and forecasts
/// run against [`AttainmentStore::imputed`].
#[derive(Debug, Clone)]
pub struct AttainmentStore {
    raw: Dataset,
    imputed: Dataset,
}

impl AttainmentStore {
    /// Store `raw` and forward-fill it.
    pub fn new(raw: Dataset) -> Self {
        Self::with_imputer(raw, &ForwardFill)
    }

    pub fn with_imputer(raw: Dataset, imputer: &dyn Imputer) -> Self {
        let imputed = impute_with(&raw, imputer);
        Self { raw, imputed }
    }

    pub fn raw(&self) -> &Dataset {
        &self.raw
    }

    pub fn imputed(&self) -> &Dataset {
        &self.imputed
    }

    /// Cells the imputer filled in.
    pub fn filled_count(&self) -> usize {
        self.raw.missing_count().saturating_sub(self.imputed.missing_count())
    }

    pub fn into_parts(self) -> (Dataset, Dataset) {
        (self.raw, self.imputed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attainment_spi::{
        AttainmentRecord, Category, DatasetStage, MinDegree, RecordKey, Sex,
    };

    #[test]
    fn test_store_keeps_both_stages() {
        let key = |year| RecordKey::new(year, Sex::All, MinDegree::Masters);
        let raw = Dataset::from_records(vec![
            AttainmentRecord::new(key(2008)).with_value(Category::Total, Some(7.0)),
            AttainmentRecord::new(key(2009)),
        ])
        .unwrap();

        let store = AttainmentStore::new(raw);
        assert_eq!(store.raw().stage(), DatasetStage::Raw);
        assert_eq!(store.imputed().stage(), DatasetStage::Imputed);
        assert_eq!(store.filled_count(), 1);

        let (raw, imputed) = store.into_parts();
        assert_eq!(
            raw.get(2009, Sex::All, MinDegree::Masters, Category::Total).unwrap(),
            None
        );
        assert_eq!(
            imputed.get(2009, Sex::All, MinDegree::Masters, Category::Total).unwrap(),
            Some(7.0)
        );
    }
}
