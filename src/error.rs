//! Error types
//!
//! Only genuinely invalid input halts a computation. Degenerate but valid
//! biology (no substrate, no product, a flat objective) is handled by
//! clamping inside the integrator and the metric library and never reaches
//! this enum.

use thiserror::Error;

/// Errors raised while building a fermentation run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FermentationError {
    /// Settings that have no sensible numerical fallback
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A flux vector too short for the configured index convention
    #[error("flux vector of length {len} has no entry for {role} (index {index})")]
    MissingFlux {
        role: &'static str,
        index: usize,
        len: usize,
    },

    /// A referenced flux entry is NaN or infinite
    #[error("flux entry for {role} (index {index}) is not finite: {value}")]
    NonFiniteFlux {
        role: &'static str,
        index: usize,
        value: f64,
    },

    /// The integrated state became NaN or infinite
    #[error("numerical instability at t = {time}: {quantity} is {value}")]
    NumericalInstability {
        time: f64,
        quantity: &'static str,
        value: f64,
    },
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, FermentationError>;
