//! Forecast output models.

use super::MinDegree;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stages a forecast passes through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForecastStage {
    ExtractSeries,
    FitModel,
    Forecast,
    Reindex,
}

impl fmt::Display for ForecastStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ForecastStage::ExtractSeries => "extract series",
            ForecastStage::FitModel => "fit model",
            ForecastStage::Forecast => "forecast",
            ForecastStage::Reindex => "reindex",
        };
        write!(f, "{}", s)
    }
}

/// A predicted percentage for a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub year: i32,
    pub value: f64,
}

/// Diagnostics of the fitted model behind a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Estimated AR(1) coefficient of the differenced series
    pub ar_coefficient: f64,
    /// Innovation variance
    pub sigma2: f64,
    pub log_likelihood: f64,
    pub iterations: u64,
    /// Number of observed years the model was fitted on
    pub observations: usize,
    /// Last observed year of the input series
    pub last_observed_year: i32,
}

/// Point forecasts for one degree, for years strictly after the last observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub min_degree: MinDegree,
    pub points: Vec<ForecastPoint>,
    pub model: ModelSummary,
}

impl ForecastResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn years(&self) -> Vec<i32> {
        self.points.iter().map(|p| p.year).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// `(year, value)` pairs ready for rendering.
    pub fn to_pairs(&self) -> Vec<(i32, f64)> {
        self.points.iter().map(|p| (p.year, p.value)).collect()
    }

    /// Points that left the valid percentage range. Values are never clamped.
    pub fn out_of_range(&self) -> Vec<ForecastPoint> {
        self.points
            .iter()
            .filter(|p| !(0.0..=100.0).contains(&p.value))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(values: &[f64]) -> ForecastResult {
        ForecastResult {
            min_degree: MinDegree::Bachelors,
            points: values
                .iter()
                .enumerate()
                .map(|(i, v)| ForecastPoint {
                    year: 2019 + i as i32,
                    value: *v,
                })
                .collect(),
            model: ModelSummary {
                ar_coefficient: 0.2,
                sigma2: 0.5,
                log_likelihood: -10.0,
                iterations: 6,
                observations: 25,
                last_observed_year: 2018,
            },
        }
    }

    #[test]
    fn test_pairs_and_accessors() {
        let r = result(&[36.0, 36.5]);
        assert_eq!(r.len(), 2);
        assert!(!r.is_empty());
        assert_eq!(r.years(), vec![2019, 2020]);
        assert_eq!(r.values(), vec![36.0, 36.5]);
        assert_eq!(r.to_pairs(), vec![(2019, 36.0), (2020, 36.5)]);
    }

    #[test]
    fn test_out_of_range_is_reported_not_clamped() {
        let r = result(&[99.5, 100.4, -0.1]);
        let flagged = r.out_of_range();
        assert_eq!(flagged.len(), 2);
        assert_eq!(flagged[0].value, 100.4);
        assert_eq!(r.values()[1], 100.4);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(ForecastStage::ExtractSeries.to_string(), "extract series");
        assert_eq!(ForecastStage::Reindex.to_string(), "reindex");
    }

    #[test]
    fn test_result_serializes() {
        let json = serde_json::to_value(result(&[30.0])).unwrap();
        assert_eq!(json["min_degree"], "Bachelors");
        assert_eq!(json["points"][0]["year"], 2019);
    }
}
