//! Attainment Facade
//!
//! Unified re-exports for the attainment module.
//!
//! This facade provides a single entry point for all attainment functionality:
//! - `attainment_spi` - Grid types, forecast output, errors and the imputer contract
//! - `attainment_api` - Configuration types, builders and selectors
//! - `attainment_core` - Dataset, loader, imputation, queries and forecasting
//!
//! # Example
//!
//! ```rust,ignore
//! use attainment_facade::prelude::*;
//!
//! let raw = AttainmentLoader::default().load_path("attainment.csv")?;
//! let store = AttainmentStore::new(raw);
//!
//! let cmp = compare_by_sex(store.imputed(), 1980, MinDegree::Bachelors)?;
//! println!("{:?}", cmp.to_pairs());
//!
//! for outcome in ForecastEngine::default().run_all(store.imputed()) {
//!     println!("{}", outcome.diagnostic());
//! }
//! ```

// Re-export everything from SPI
pub use attainment_spi::*;

// Re-export everything from API
pub use attainment_api::*;

// Re-export everything from Core
pub use attainment_core::*;

/// Everything needed for the load, impute, query and forecast workflow
pub mod prelude {
    pub use attainment_api::{ForecastConfig, LoadConfig, Selector, YearRange};
    pub use attainment_core::{
        compare_by_sex, mean_by_degree, series, AttainmentLoader, AttainmentStore, Dataset,
        ForecastEngine, ForecastOutcome,
    };
    pub use attainment_spi::{
        AttainmentError, Category, ForecastResult, MinDegree, Percent, Result, Sex,
    };
}
