//! Algorithm Service Provider Interface
//!
//! Defines core traits and error types for univariate time series models.
//!
//! - [`Predictor`]: fit-then-forecast contract every model implements
//! - [`TsError`]: standardized error type for all algorithm operations
//! - [`Result`]: convenient result type alias

pub mod contract;
pub mod error;

// Re-export all public items at crate root for convenience
pub use contract::Predictor;
pub use error::{Result, TsError};
