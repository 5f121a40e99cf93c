//! Error module containing error types and result aliases

mod attainment_error;

pub use attainment_error::AttainmentError;

/// Result type for attainment operations
pub type Result<T> = std::result::Result<T, AttainmentError>;
