//! Loader and forecast configuration types.

use serde::{Deserialize, Serialize};

/// Token the source table uses for missing cells.
pub const DEFAULT_MISSING_TOKEN: &str = "---";

/// Configuration for reading the attainment table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Cell text that denotes a missing value (empty cells are always missing)
    pub missing_token: String,
    /// Field delimiter
    pub delimiter: u8,
    /// Reject tables whose (year, sex, degree) grid is not a full cross product
    pub require_complete_grid: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            missing_token: DEFAULT_MISSING_TOKEN.to_string(),
            delimiter: b',',
            require_complete_grid: false,
        }
    }
}

impl LoadConfig {
    /// Default configuration with a complete-grid check.
    pub fn strict() -> Self {
        Self {
            require_complete_grid: true,
            ..Self::default()
        }
    }

    /// Whether a trimmed cell counts as missing.
    pub fn is_missing(&self, cell: &str) -> bool {
        let cell = cell.trim();
        cell.is_empty() || cell == self.missing_token
    }
}

/// Builder for LoadConfig.
#[derive(Debug, Default)]
pub struct LoadConfigBuilder {
    missing_token: Option<String>,
    delimiter: Option<u8>,
    require_complete_grid: Option<bool>,
}

impl LoadConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the missing-value token.
    pub fn missing_token(mut self, token: &str) -> Self {
        self.missing_token = Some(token.to_string());
        self
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Require a complete cross-product grid.
    pub fn require_complete_grid(mut self, required: bool) -> Self {
        self.require_complete_grid = Some(required);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<LoadConfig, &'static str> {
        let defaults = LoadConfig::default();
        let missing_token = self.missing_token.unwrap_or(defaults.missing_token);
        if missing_token.trim().is_empty() {
            return Err("missing_token must not be blank");
        }
        let delimiter = self.delimiter.unwrap_or(defaults.delimiter);
        if delimiter == b'"' || delimiter == b'\n' || delimiter == b'\r' {
            return Err("delimiter must not be a quote or line break");
        }
        if missing_token.as_bytes().contains(&delimiter) {
            return Err("missing_token must not contain the delimiter");
        }
        Ok(LoadConfig {
            missing_token: missing_token.trim().to_string(),
            delimiter,
            require_complete_grid: self
                .require_complete_grid
                .unwrap_or(defaults.require_complete_grid),
        })
    }
}

/// Configuration for the per-degree forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of years to project past the last observation
    pub steps: usize,
    /// Optimizer iteration cap
    pub max_iter: u64,
    /// Optimizer gradient tolerance
    pub tolerance: f64,
    /// Shortest series the model is fitted on
    pub min_observations: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            steps: 5,
            max_iter: 200,
            tolerance: 1e-6,
            min_observations: 4,
        }
    }
}

impl ForecastConfig {
    /// Default configuration projecting `steps` years.
    pub fn with_steps(steps: usize) -> Self {
        Self {
            steps,
            ..Self::default()
        }
    }
}

/// Builder for ForecastConfig.
#[derive(Debug, Default)]
pub struct ForecastConfigBuilder {
    steps: Option<usize>,
    max_iter: Option<u64>,
    tolerance: Option<f64>,
    min_observations: Option<usize>,
}

impl ForecastConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the forecast horizon.
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Set the optimizer iteration cap.
    pub fn max_iter(mut self, max_iter: u64) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    /// Set the optimizer tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the minimum series length.
    pub fn min_observations(mut self, min_observations: usize) -> Self {
        self.min_observations = Some(min_observations);
        self
    }

    /// Build the configuration.
    ///
    /// The model needs at least four observations, so a lower
    /// `min_observations` is rejected rather than silently raised.
    pub fn build(self) -> Result<ForecastConfig, &'static str> {
        let defaults = ForecastConfig::default();
        let config = ForecastConfig {
            steps: self.steps.unwrap_or(defaults.steps),
            max_iter: self.max_iter.unwrap_or(defaults.max_iter),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
            min_observations: self.min_observations.unwrap_or(defaults.min_observations),
        };
        if config.steps == 0 {
            return Err("steps must be at least 1");
        }
        if config.max_iter == 0 {
            return Err("max_iter must be at least 1");
        }
        if !config.tolerance.is_finite() || config.tolerance <= 0.0 {
            return Err("tolerance must be a positive number");
        }
        if config.min_observations < defaults.min_observations {
            return Err("min_observations must be at least 4");
        }
        Ok(config)
    }
}
