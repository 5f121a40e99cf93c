//! Contract traits for algorithm implementations
//!
//! - [`Predictor`]: the primary trait for time series prediction

mod predictor;

pub use predictor::Predictor;
