//! Flux vectors and the index convention that gives them meaning
//!
//! A flux vector comes from an upstream flux-balance solve and is opaque to
//! this crate except for three entries: the growth rate, the substrate
//! exchange rate and the product exchange rate. [`FluxConvention`] names the
//! index of each; [`ExchangeRates`] is the validated triple pulled out of a
//! vector with a given convention.

use crate::error::{FermentationError, Result};
use serde::{Deserialize, Serialize};

/// Ordered per-reaction rates from a metabolic network solve
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FluxVector(Vec<f64>);

impl FluxVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for FluxVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[f64; N]> for FluxVector {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

/// Which flux index plays which role in the kinetic law
///
/// Defaults to `[growth, substrate, product]` at indices `0, 1, 2`, the
/// layout produced when only the biomass, substrate exchange and product
/// exchange reactions are reported.
///
/// Rates are biomass-specific: growth in 1/h, exchanges in
/// concentration per unit biomass per hour. Uptake is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluxConvention {
    pub growth: usize,
    pub substrate_uptake: usize,
    pub product_secretion: usize,
}

impl Default for FluxConvention {
    fn default() -> Self {
        Self {
            growth: 0,
            substrate_uptake: 1,
            product_secretion: 2,
        }
    }
}

impl FluxConvention {
    /// Extract and validate the three rates used by the kinetic law
    pub fn exchange_rates(&self, fluxes: &FluxVector) -> Result<ExchangeRates> {
        Ok(ExchangeRates {
            growth: lookup(fluxes, self.growth, "growth")?,
            substrate: lookup(fluxes, self.substrate_uptake, "substrate uptake")?,
            product: lookup(fluxes, self.product_secretion, "product secretion")?,
        })
    }
}

fn lookup(fluxes: &FluxVector, index: usize, role: &'static str) -> Result<f64> {
    let value = fluxes.get(index).ok_or(FermentationError::MissingFlux {
        role,
        index,
        len: fluxes.len(),
    })?;

    if !value.is_finite() {
        return Err(FermentationError::NonFiniteFlux { role, index, value });
    }

    Ok(value)
}

/// Growth, substrate and product rates of one flux regime
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRates {
    /// Specific growth rate μ \[1/h\]
    pub growth: f64,
    /// Specific substrate exchange (negative for uptake)
    pub substrate: f64,
    /// Specific product exchange
    pub product: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_convention() {
        let rates = FluxConvention::default()
            .exchange_rates(&FluxVector::from([0.3, -5.0, 2.0]))
            .unwrap();

        assert_eq!(rates.growth, 0.3);
        assert_eq!(rates.substrate, -5.0);
        assert_eq!(rates.product, 2.0);
    }

    #[test]
    fn test_custom_convention() {
        let convention = FluxConvention {
            growth: 3,
            substrate_uptake: 0,
            product_secretion: 1,
        };
        let rates = convention
            .exchange_rates(&FluxVector::from([-10.0, 4.0, 99.0, 0.2]))
            .unwrap();

        assert_eq!(rates.growth, 0.2);
        assert_eq!(rates.substrate, -10.0);
        assert_eq!(rates.product, 4.0);
    }

    #[test]
    fn test_short_vector_is_rejected() {
        let err = FluxConvention::default()
            .exchange_rates(&FluxVector::from([0.3, -5.0]))
            .unwrap_err();

        assert_eq!(
            err,
            FermentationError::MissingFlux { role: "product secretion", index: 2, len: 2 }
        );
    }

    #[test]
    fn test_non_finite_entry_is_rejected() {
        let err = FluxConvention::default()
            .exchange_rates(&FluxVector::from([f64::NAN, -5.0, 1.0]))
            .unwrap_err();

        assert!(matches!(err, FermentationError::NonFiniteFlux { index: 0, .. }));
    }
}
