//! Predictor trait for time series algorithms

use crate::error::Result;

/// Common trait for all time series predictors
///
/// Models follow a fit-predict pattern: `fit` estimates parameters from an
/// ordered, gap-free series and `predict` extends it by `steps` points.
///
/// # Example
///
/// ```rust,ignore
/// use algorithm_spi::Predictor;
///
/// fn forecast<P: Predictor>(predictor: &mut P, data: &[f64], horizon: usize) -> algorithm_spi::Result<Vec<f64>> {
///     predictor.fit(data)?;
///     predictor.predict(horizon)
/// }
/// ```
pub trait Predictor {
    /// Fit the model to historical data
    ///
    /// # Arguments
    ///
    /// * `data` - Historical observations, oldest first
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Predict the expected value of the next `steps` observations
    fn predict(&self, steps: usize) -> Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;

    /// Smallest series length `fit` accepts
    fn min_observations(&self) -> usize;
}
