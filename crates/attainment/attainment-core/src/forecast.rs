//! Per-degree ARIMA(1,1,0) forecasting of Total attainment.
//!
//! One run walks `ExtractSeries -> FitModel -> Forecast -> Reindex`. The
//! first failing stage stops the run and is reported in the outcome; runs
//! for different degrees share nothing but the read-only dataset.

use crate::dataset::Dataset;
use crate::query;
use algorithm_core::{Arima, OptimizerConfig};
use algorithm_spi::{Predictor, TsError};
use attainment_api::ForecastConfig;
use attainment_spi::{
    AttainmentError, Category, ForecastPoint, ForecastResult, ForecastStage, MinDegree,
    ModelSummary, Result, Sex,
};
use rayon::prelude::*;
use std::fmt;

/// Stage and cause of a failed run.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastFailure {
    pub stage: ForecastStage,
    pub error: AttainmentError,
}

impl fmt::Display for ForecastFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.stage, self.error)
    }
}

/// Result of forecasting one degree. Never an error at the call site.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastOutcome {
    pub min_degree: MinDegree,
    pub result: std::result::Result<ForecastResult, ForecastFailure>,
}

impl ForecastOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn forecast(&self) -> Option<&ForecastResult> {
        self.result.as_ref().ok()
    }

    pub fn failure(&self) -> Option<&ForecastFailure> {
        self.result.as_ref().err()
    }

    /// Forecast pairs, empty when the run failed.
    pub fn to_pairs(&self) -> Vec<(i32, f64)> {
        self.forecast().map(ForecastResult::to_pairs).unwrap_or_default()
    }

    /// One-line summary for reports.
    pub fn diagnostic(&self) -> String {
        match &self.result {
            Ok(result) => format!(
                "{}: {} points from {} observations (phi={:.4}, sigma2={:.4})",
                self.min_degree,
                result.len(),
                result.model.observations,
                result.model.ar_coefficient,
                result.model.sigma2
            ),
            Err(failure) => format!("{}: {}", self.min_degree, failure),
        }
    }
}

/// Assign calendar years `last_observed_year + 1 ..` to forecast values.
///
/// `None` when a year would not fit in an `i32`.
pub fn reindex(values: &[f64], last_observed_year: i32) -> Option<Vec<ForecastPoint>> {
    (1..)
        .zip(values)
        .map(|(ahead, &value)| {
            let year = last_observed_year.checked_add(ahead)?;
            Some(ForecastPoint { year, value })
        })
        .collect()
}

fn fit_error(min_degree: MinDegree, error: TsError) -> AttainmentError {
    match error {
        TsError::InvalidData(reason) => AttainmentError::ModelInputError { min_degree, reason },
        other => AttainmentError::ModelFitError {
            min_degree,
            reason: other.to_string(),
        },
    }
}

/// Fits and projects the Sex=All Total series of each degree.
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine {
    config: ForecastConfig,
}

impl ForecastEngine {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// `(year, Total)` observations for Sex=All, oldest first.
    ///
    /// Any missing value, including a leading gap imputation could not
    /// fill, makes the series unusable.
    pub fn extract_series(&self, dataset: &Dataset, min_degree: MinDegree) -> Result<Vec<(i32, f64)>> {
        let raw = query::series(dataset, Sex::All, min_degree, Category::Total);
        if raw.is_empty() {
            return Err(AttainmentError::ModelInputError {
                min_degree,
                reason: "no observations for both sexes combined".to_string(),
            });
        }

        raw.iter()
            .enumerate()
            .map(|(pos, &(year, value))| {
                value.map(|v| (year, v)).ok_or_else(|| {
                    let reason = if pos == 0 {
                        format!("leading gap: no Total value in {}", year)
                    } else {
                        format!("missing Total value in {}", year)
                    };
                    AttainmentError::ModelInputError { min_degree, reason }
                })
            })
            .collect()
    }

    /// Fit ARIMA(1,1,0) to `values`.
    pub fn fit_model(&self, min_degree: MinDegree, values: &[f64]) -> Result<Arima> {
        if values.len() < self.config.min_observations {
            return Err(AttainmentError::ModelFitError {
                min_degree,
                reason: format!(
                    "need at least {} observations, got {}",
                    self.config.min_observations,
                    values.len()
                ),
            });
        }

        let optimizer = OptimizerConfig {
            max_iter: self.config.max_iter,
            tol: self.config.tolerance,
            ..OptimizerConfig::default()
        };
        let mut model = Arima::new(1, 1, 0)
            .map_err(|e| fit_error(min_degree, e))?
            .with_optimizer(optimizer);
        model.fit(values).map_err(|e| fit_error(min_degree, e))?;
        Ok(model)
    }

    /// Point forecasts for the configured horizon. Values are not clamped.
    pub fn forecast_values(&self, min_degree: MinDegree, model: &Arima) -> Result<Vec<f64>> {
        model
            .predict(self.config.steps)
            .map_err(|e| fit_error(min_degree, e))
    }

    /// Run every stage, surfacing the first error.
    pub fn forecast(&self, dataset: &Dataset, min_degree: MinDegree) -> Result<ForecastResult> {
        self.run(dataset, min_degree).result.map_err(|f| f.error)
    }

    /// Run every stage for one degree; failures are captured, not returned.
    pub fn run(&self, dataset: &Dataset, min_degree: MinDegree) -> ForecastOutcome {
        let result = self.run_stages(dataset, min_degree);
        match &result {
            Ok(forecast) => {
                for point in forecast.out_of_range() {
                    tracing::warn!(
                        min_degree = %min_degree,
                        year = point.year,
                        value = point.value,
                        "forecast outside [0, 100]"
                    );
                }
                tracing::info!(
                    min_degree = %min_degree,
                    steps = forecast.len(),
                    phi = forecast.model.ar_coefficient,
                    "forecast complete"
                );
            }
            Err(failure) => {
                tracing::warn!(min_degree = %min_degree, %failure, "forecast failed");
            }
        }
        ForecastOutcome { min_degree, result }
    }

    /// Forecast every degree in [`MinDegree::ALL`] order, in parallel.
    pub fn run_all(&self, dataset: &Dataset) -> Vec<ForecastOutcome> {
        MinDegree::ALL
            .par_iter()
            .map(|&min_degree| self.run(dataset, min_degree))
            .collect()
    }

    fn run_stages(
        &self,
        dataset: &Dataset,
        min_degree: MinDegree,
    ) -> std::result::Result<ForecastResult, ForecastFailure> {
        let at = |stage: ForecastStage| move |error: AttainmentError| ForecastFailure { stage, error };

        let observed = self
            .extract_series(dataset, min_degree)
            .map_err(at(ForecastStage::ExtractSeries))?;
        // extract_series never returns an empty series
        let last_observed_year = observed[observed.len() - 1].0;
        let values: Vec<f64> = observed.iter().map(|&(_, v)| v).collect();
        tracing::debug!(min_degree = %min_degree, observations = values.len(), "series extracted");

        let model = self
            .fit_model(min_degree, &values)
            .map_err(at(ForecastStage::FitModel))?;

        let predicted = self
            .forecast_values(min_degree, &model)
            .map_err(at(ForecastStage::Forecast))?;

        let points = reindex(&predicted, last_observed_year).ok_or_else(|| ForecastFailure {
            stage: ForecastStage::Reindex,
            error: AttainmentError::ModelInputError {
                min_degree,
                reason: format!(
                    "{} forecast years after {} overflow the year range",
                    predicted.len(),
                    last_observed_year
                ),
            },
        })?;

        Ok(ForecastResult {
            min_degree,
            points,
            model: ModelSummary {
                ar_coefficient: model.ar_coefficients().first().copied().unwrap_or(0.0),
                sigma2: model.sigma2(),
                log_likelihood: model.log_likelihood(),
                iterations: model.iterations(),
                observations: values.len(),
                last_observed_year,
            },
        })
    }
}
