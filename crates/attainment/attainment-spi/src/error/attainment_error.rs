//! Attainment error types.

use crate::model::{MinDegree, Sex};
use thiserror::Error;

/// Errors surfaced by loading, querying and forecasting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttainmentError {
    /// Malformed input record: bad year, unknown enum value, unknown header,
    /// out-of-range percentage or duplicate key
    #[error("Parse error{}: {message}", line_suffix(.line))]
    ParseError {
        line: Option<usize>,
        message: String,
    },

    /// The (year, sex, degree) triple is not part of the grid
    #[error("No record for year {year}, sex {sex}, degree {min_degree}")]
    KeyNotFound {
        year: i32,
        sex: Sex,
        min_degree: MinDegree,
    },

    /// The series handed to the model is unusable
    #[error("Unusable series for {min_degree}: {reason}")]
    ModelInputError {
        min_degree: MinDegree,
        reason: String,
    },

    /// Estimation failed or the series is too short
    #[error("Model fit failed for {min_degree}: {reason}")]
    ModelFitError {
        min_degree: MinDegree,
        reason: String,
    },

    /// Underlying file could not be read
    #[error("I/O error: {0}")]
    Io(String),
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

impl AttainmentError {
    /// Parse error without a known source line.
    pub fn parse(message: impl Into<String>) -> Self {
        AttainmentError::ParseError {
            line: None,
            message: message.into(),
        }
    }

    /// Attach a source line to a parse error that has none; other variants pass through.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            AttainmentError::ParseError {
                line: None,
                message,
            } => AttainmentError::ParseError {
                line: Some(line),
                message,
            },
            other => other,
        }
    }

    /// Whether this error belongs to the forecasting stages.
    pub fn is_model_error(&self) -> bool {
        matches!(
            self,
            AttainmentError::ModelInputError { .. } | AttainmentError::ModelFitError { .. }
        )
    }
}
