//! Attainment Service Provider Interface
//!
//! Types shared by every layer of the attainment stack: the composite record
//! key, the per-category percentage record, forecast output, the error
//! taxonomy and the [`Imputer`] contract.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Imputer;
pub use error::{AttainmentError, Result};
pub use model::{
    AttainmentRecord, Category, DatasetStage, ForecastPoint, ForecastResult, ForecastStage,
    MinDegree, ModelSummary, Percent, RawRow, RecordKey, Sex,
};
