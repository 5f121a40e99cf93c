//! Dataset lifecycle stage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a dataset still carries its loaded gaps or has been forward-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DatasetStage {
    /// As loaded
    #[default]
    Raw,
    /// After forward-fill
    Imputed,
}

impl fmt::Display for DatasetStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetStage::Raw => write!(f, "raw"),
            DatasetStage::Imputed => write!(f, "imputed"),
        }
    }
}
