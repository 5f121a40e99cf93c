//! Algorithm Core Implementations
//!
//! Univariate time series models and the numerical plumbing they share:
//!
//! - [`regression`]: ARIMA with exact-likelihood estimation
//! - [`optimizer`]: one-parameter bounded L-BFGS on top of `argmin`
//! - [`utils`]: differencing and integration helpers
//!
//! ## Example
//!
//! ```rust
//! use algorithm_core::prelude::*;
//!
//! let data = vec![10.0, 10.8, 11.9, 12.4, 13.8, 14.1, 15.5, 16.0];
//! let mut model = Arima::new(1, 1, 0).unwrap();
//! model.fit(&data).unwrap();
//! let forecast = model.predict(3).unwrap();
//! assert_eq!(forecast.len(), 3);
//! ```

pub mod optimizer;
pub mod regression;
pub mod utils;

// Re-export from SPI
pub use algorithm_spi::{Predictor, Result, TsError};

pub use optimizer::{LbfgsOptimizer, OptimizerConfig, ScalarMinimum, ScalarObjective};
pub use regression::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use algorithm_spi::Predictor;
    pub use crate::optimizer::OptimizerConfig;
    pub use crate::regression::Arima;
    pub use algorithm_spi::{Result, TsError};
}
