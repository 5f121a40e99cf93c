//! Attainment API
//!
//! Configuration for loading and forecasting, plus the selector types used
//! to address slices of the attainment grid.

pub mod config;
pub mod selector;

pub use config::{ForecastConfig, ForecastConfigBuilder, LoadConfig, LoadConfigBuilder};
pub use selector::{Selector, YearRange};

/// Common imports for callers configuring the attainment stack
pub mod prelude {
    pub use crate::config::{ForecastConfig, LoadConfig};
    pub use crate::selector::{Selector, YearRange};
}
