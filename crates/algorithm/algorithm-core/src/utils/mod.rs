//! Shared helpers for model implementations

pub mod preprocessing;
