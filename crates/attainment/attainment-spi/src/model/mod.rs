//! Data models for the attainment grid.

mod category;
mod forecast;
mod min_degree;
mod raw_row;
mod record;
mod sex;
mod stage;

pub use category::Category;
pub use forecast::{ForecastPoint, ForecastResult, ForecastStage, ModelSummary};
pub use min_degree::MinDegree;
pub use raw_row::RawRow;
pub use record::{AttainmentRecord, Percent, RecordKey};
pub use sex::Sex;
pub use stage::DatasetStage;

/// Lowercase and drop the characters source files use inconsistently in labels.
pub(crate) fn normalize_label(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\'' | '\u{2019}' | '_' | '-' | '/'))
        .flat_map(char::to_lowercase)
        .collect()
}
