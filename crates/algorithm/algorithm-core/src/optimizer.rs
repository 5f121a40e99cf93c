//! Bounded one-parameter minimisation
//!
//! Likelihoods in this crate depend on a single coefficient confined to an
//! interval. The interval is enforced by projecting every trial point onto
//! it before evaluation, and L-BFGS from `argmin` drives the search.

use algorithm_spi::{Result, TsError};
use argmin::core::{CostFunction, Executor, Gradient, State, TerminationReason, TerminationStatus};
use argmin::solver::linesearch::MoreThuenteLineSearch;
use argmin::solver::quasinewton::LBFGS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Settings for [`LbfgsOptimizer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Iteration cap
    pub max_iter: u64,
    /// Gradient tolerance; the cost tolerance is a tenth of it
    pub tol: f64,
    /// L-BFGS history length
    pub m: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_iter: 200,
            tol: 1e-6,
            m: 5,
        }
    }
}

/// Smooth function of one parameter with a known derivative
pub trait ScalarObjective: Send + Sync {
    fn value(&self, x: f64) -> Result<f64>;

    fn derivative(&self, x: f64) -> Result<f64>;
}

/// Best point found by [`LbfgsOptimizer::minimize`]
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarMinimum {
    pub x: f64,
    pub value: f64,
    pub iterations: u64,
    pub converged: bool,
    /// argmin termination status
    pub status: String,
}

impl fmt::Display for ScalarMinimum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min {:.6} at x={:.6} after {} iterations ({})",
            self.value, self.x, self.iterations, self.status
        )
    }
}

/// The objective as argmin sees it: a length-one vector projected onto [lower, upper]
struct BoundedProblem<'a> {
    objective: &'a dyn ScalarObjective,
    lower: f64,
    upper: f64,
}

impl BoundedProblem<'_> {
    fn project(&self, param: &[f64]) -> f64 {
        param
            .first()
            .copied()
            .unwrap_or(self.lower)
            .clamp(self.lower, self.upper)
    }
}

impl CostFunction for BoundedProblem<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, param: &Self::Param) -> std::result::Result<f64, argmin::core::Error> {
        self.objective
            .value(self.project(param))
            .map_err(|e| argmin::core::Error::msg(e.to_string()))
    }
}

impl Gradient for BoundedProblem<'_> {
    type Param = Vec<f64>;
    type Gradient = Vec<f64>;

    fn gradient(&self, param: &Self::Param) -> std::result::Result<Vec<f64>, argmin::core::Error> {
        let x = self.project(param);
        let slope = self
            .objective
            .derivative(x)
            .map_err(|e| argmin::core::Error::msg(e.to_string()))?;

        // Zero at an active bound so the line search stops pushing outward
        let outward = (x == self.lower && slope > 0.0) || (x == self.upper && slope < 0.0);
        Ok(vec![if outward { 0.0 } else { slope }])
    }
}

/// L-BFGS over a closed interval
#[derive(Debug, Clone, Default)]
pub struct LbfgsOptimizer {
    config: OptimizerConfig,
}

impl LbfgsOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Minimise `objective` on `[lower, upper]` starting from `start`.
    ///
    /// A start outside the interval is projected onto it. Running out of
    /// iterations is not an error; check [`ScalarMinimum::converged`].
    pub fn minimize(
        &self,
        objective: &dyn ScalarObjective,
        start: f64,
        (lower, upper): (f64, f64),
    ) -> Result<ScalarMinimum> {
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err(TsError::InvalidParameter {
                name: "bounds".to_string(),
                reason: format!("[{lower}, {upper}] is not a finite interval"),
            });
        }
        if !start.is_finite() {
            return Err(TsError::InvalidParameter {
                name: "start".to_string(),
                reason: format!("{start} is not finite"),
            });
        }

        let problem = BoundedProblem {
            objective,
            lower,
            upper,
        };
        let tol_cost = (0.1 * self.config.tol).max(1e-12);
        let invalid_tol = |e: argmin::core::Error| TsError::InvalidParameter {
            name: "tol".to_string(),
            reason: e.to_string(),
        };
        let solver = LBFGS::new(MoreThuenteLineSearch::new(), self.config.m)
            .with_tolerance_grad(self.config.tol)
            .map_err(invalid_tol)?
            .with_tolerance_cost(tol_cost)
            .map_err(invalid_tol)?;

        let res = Executor::new(problem, solver)
            .configure(|state| {
                state
                    .param(vec![start.clamp(lower, upper)])
                    .max_iters(self.config.max_iter)
            })
            .run()
            .map_err(|e| TsError::Optimizer(e.to_string()))?;

        let state = res.state();
        let x = state
            .get_best_param()
            .and_then(|p| p.first().copied())
            .map(|x| x.clamp(lower, upper))
            .ok_or_else(|| TsError::Optimizer("solver returned no parameter".to_string()))?;
        let status = state.get_termination_status();
        let minimum = ScalarMinimum {
            x,
            value: state.get_best_cost(),
            iterations: state.get_iter(),
            converged: matches!(
                status,
                TerminationStatus::Terminated(
                    TerminationReason::SolverConverged | TerminationReason::TargetCostReached
                )
            ),
            status: status.to_string(),
        };

        tracing::debug!(%minimum, "lbfgs finished");
        Ok(minimum)
    }
}
