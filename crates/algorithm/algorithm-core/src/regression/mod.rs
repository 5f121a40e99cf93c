//! Regression and statistical models for time series forecasting
//!
//! - **ARIMA**: AutoRegressive Integrated Moving Average, fitted by maximum likelihood

pub mod arima;

pub use arima::Arima;
