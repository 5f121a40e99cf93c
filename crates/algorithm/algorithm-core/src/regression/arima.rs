//! ARIMA (AutoRegressive Integrated Moving Average) implementation
//!
//! The series is differenced `d` times and the result is modelled as a
//! zero-mean AR(p) process with Gaussian innovations:
//!
//! - **AR**: `w_t = φ w_{t-1} + ε_t`, with `p` in {0, 1}
//! - **I**: `d` rounds of first differencing (0..=2)
//! - **MA**: not supported, `q` must be 0
//!
//! φ is estimated by exact maximum likelihood. The innovation variance is
//! concentrated out, leaving a one-dimensional problem solved with bounded
//! L-BFGS under the stationarity constraint `|φ| <= 0.99`.
//!
//! ## Example
//!
//! ```rust
//! use algorithm_core::regression::Arima;
//! use algorithm_core::Predictor;
//!
//! let data = vec![27.5, 28.4, 29.3, 28.7, 30.6, 31.7, 30.8, 32.2, 33.5, 33.7];
//! let mut model = Arima::new(1, 1, 0).unwrap();
//! model.fit(&data).unwrap();
//! let forecast = model.predict(3).unwrap();
//! assert_eq!(forecast.len(), 3);
//! ```

use crate::optimizer::{LbfgsOptimizer, OptimizerConfig, ScalarObjective};
use crate::utils::preprocessing::{difference, integrate, integration_anchors};
use algorithm_spi::{Predictor, Result, TsError};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Stationarity bound on the AR coefficient
const PHI_BOUND: f64 = 0.99;

/// Differenced observations the likelihood needs to be identifiable
const MIN_DIFFERENCED: usize = 3;

/// Below this the differenced series is treated as constant
const VARIANCE_FLOOR: f64 = 1e-12;

/// ARIMA model for time series forecasting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arima {
    /// AR order (p)
    p: usize,
    /// Differencing order (d)
    d: usize,
    /// MA order (q)
    q: usize,
    /// AR coefficient (0 when p = 0)
    phi: f64,
    /// Innovation variance at the optimum
    sigma2: f64,
    /// Maximised exact log-likelihood
    log_likelihood: f64,
    /// Optimizer iterations spent in the last fit
    iterations: u64,
    /// Differenced data
    differenced_data: Vec<f64>,
    /// Constants of integration, outermost level first
    anchors: Vec<f64>,
    /// Optimizer settings
    optimizer: OptimizerConfig,
    /// Whether the model has been fitted
    fitted: bool,
}

impl Arima {
    /// Create a new ARIMA model with specified orders
    ///
    /// # Arguments
    ///
    /// * `p` - Order of autoregressive component (0 or 1)
    /// * `d` - Degree of differencing (0-2)
    /// * `q` - Order of moving average component (must be 0)
    pub fn new(p: usize, d: usize, q: usize) -> Result<Self> {
        if p > 1 {
            return Err(TsError::InvalidParameter {
                name: "p".to_string(),
                reason: "AR order must be 0 or 1".to_string(),
            });
        }
        if d > 2 {
            return Err(TsError::InvalidParameter {
                name: "d".to_string(),
                reason: "Differencing order must be <= 2".to_string(),
            });
        }
        if q != 0 {
            return Err(TsError::InvalidParameter {
                name: "q".to_string(),
                reason: "MA terms are not supported".to_string(),
            });
        }

        Ok(Self {
            p,
            d,
            q,
            phi: 0.0,
            sigma2: 0.0,
            log_likelihood: f64::NEG_INFINITY,
            iterations: 0,
            differenced_data: Vec::new(),
            anchors: Vec::new(),
            optimizer: OptimizerConfig::default(),
            fitted: false,
        })
    }

    /// Replace the optimizer settings used by [`Predictor::fit`]
    pub fn with_optimizer(mut self, config: OptimizerConfig) -> Self {
        self.optimizer = config;
        self
    }

    /// Get model parameters
    pub fn params(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// Get AR coefficients
    pub fn ar_coefficients(&self) -> Vec<f64> {
        if self.p == 0 {
            Vec::new()
        } else {
            vec![self.phi]
        }
    }

    /// Innovation variance
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Exact log-likelihood at the fitted parameters
    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    /// Optimizer iterations spent in the last fit
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Lag-one autocorrelation of the zero-mean series, used as starting point
    fn initial_phi(w: &[f64]) -> f64 {
        let denom: f64 = w.iter().map(|x| x * x).sum();
        if denom < VARIANCE_FLOOR {
            return 0.0;
        }
        let num: f64 = w.windows(2).map(|pair| pair[0] * pair[1]).sum();
        (num / denom).clamp(-0.9, 0.9)
    }
}

/// Negative exact log-likelihood of a zero-mean AR(1) with σ² concentrated out
struct Ar1Likelihood<'a> {
    w: &'a [f64],
}

impl Ar1Likelihood<'_> {
    /// S(φ) = (1 - φ²) w₁² + Σ (w_t - φ w_{t-1})²
    fn sum_of_squares(&self, phi: f64) -> f64 {
        let head = self.w[0];
        let tail: f64 = self
            .w
            .windows(2)
            .map(|pair| (pair[1] - phi * pair[0]).powi(2))
            .sum();
        (1.0 - phi * phi) * head * head + tail
    }

    fn sum_of_squares_derivative(&self, phi: f64) -> f64 {
        let head = self.w[0];
        let tail: f64 = self
            .w
            .windows(2)
            .map(|pair| -2.0 * pair[0] * (pair[1] - phi * pair[0]))
            .sum();
        -2.0 * phi * head * head + tail
    }

    fn checked_sum_of_squares(&self, phi: f64) -> Result<f64> {
        let s = self.sum_of_squares(phi);
        if !s.is_finite() || s <= 0.0 {
            return Err(TsError::NumericalError(format!(
                "non-positive residual sum of squares at phi={phi}"
            )));
        }
        Ok(s)
    }
}

impl ScalarObjective for Ar1Likelihood<'_> {
    fn value(&self, phi: f64) -> Result<f64> {
        let n = self.w.len() as f64;
        let s = self.checked_sum_of_squares(phi)?;
        Ok(0.5 * n * ((2.0 * PI * s / n).ln() + 1.0) - 0.5 * (1.0 - phi * phi).ln())
    }

    fn derivative(&self, phi: f64) -> Result<f64> {
        let n = self.w.len() as f64;
        let s = self.checked_sum_of_squares(phi)?;
        let ds = self.sum_of_squares_derivative(phi);
        Ok(0.5 * n * ds / s + phi / (1.0 - phi * phi))
    }
}

impl Predictor for Arima {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        self.fitted = false;

        let min_required = self.min_observations();
        if data.len() < min_required {
            return Err(TsError::InsufficientData {
                required: min_required,
                actual: data.len(),
            });
        }

        if data.iter().any(|x| !x.is_finite()) {
            return Err(TsError::InvalidData(
                "Data contains NaN or infinite values".to_string(),
            ));
        }

        let w = difference(data, self.d);
        let n = w.len() as f64;
        let energy: f64 = w.iter().map(|x| x * x).sum();
        if energy / n < VARIANCE_FLOOR {
            return Err(TsError::NumericalError(
                "differenced series has zero variance".to_string(),
            ));
        }

        let likelihood = Ar1Likelihood { w: &w };
        let (phi, nll, iterations) = if self.p == 0 {
            (0.0, likelihood.value(0.0)?, 0)
        } else {
            let minimum = LbfgsOptimizer::new(self.optimizer.clone()).minimize(
                &likelihood,
                Self::initial_phi(&w),
                (-PHI_BOUND, PHI_BOUND),
            )?;
            if !minimum.converged {
                tracing::debug!(status = %minimum.status, "arima fit did not converge");
                return Err(TsError::ConvergenceFailure {
                    iterations: minimum.iterations,
                });
            }
            (minimum.x, minimum.value, minimum.iterations)
        };

        self.phi = phi;
        self.sigma2 = likelihood.sum_of_squares(phi) / n;
        self.log_likelihood = -nll;
        self.iterations = iterations;
        self.anchors = integration_anchors(data, self.d);
        self.differenced_data = w;
        self.fitted = true;

        tracing::debug!(
            p = self.p,
            d = self.d,
            phi = self.phi,
            sigma2 = self.sigma2,
            iterations,
            "arima fitted"
        );
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(TsError::NotFitted);
        }

        if steps == 0 {
            return Ok(Vec::new());
        }

        let mut last = self
            .differenced_data
            .last()
            .copied()
            .ok_or(TsError::NotFitted)?;

        // Conditional expectation of the differenced process
        let mut forecasts = Vec::with_capacity(steps);
        for _ in 0..steps {
            last *= self.phi;
            forecasts.push(last);
        }

        Ok(integrate(&forecasts, &self.anchors))
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }

    fn min_observations(&self) -> usize {
        self.d + MIN_DIFFERENCED
    }
}
