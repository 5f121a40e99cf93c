//! Attainment Core
//!
//! Implementations over the attainment grid:
//!
//! - [`dataset`]: the indexed (year, sex, degree) table
//! - [`loader`]: CSV reader producing a raw dataset
//! - [`impute`]: per-partition forward fill
//! - [`store`]: raw and imputed datasets side by side
//! - [`query`]: comparisons, means and presentation-ready series
//! - [`forecast`]: ARIMA(1,1,0) projection of Total attainment

pub mod dataset;
pub mod forecast;
pub mod impute;
pub mod loader;
pub mod query;
pub mod store;

// Re-export SPI types for implementations
pub use attainment_spi::{AttainmentError, Imputer, Result};

pub use dataset::Dataset;
pub use forecast::{reindex, ForecastEngine, ForecastFailure, ForecastOutcome};
pub use impute::{impute, impute_with, ForwardFill};
pub use loader::AttainmentLoader;
pub use query::{
    category_gap_series, compare_by_sex, mean_by_degree, series, sex_gap_series, SexComparison,
};
pub use store::AttainmentStore;
