//! Contract traits for attainment implementations

mod imputer;

pub use imputer::Imputer;
