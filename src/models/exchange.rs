//! Exchange-flux kinetics (dynamic flux balance)
//!
//! Each flux regime is a steady-state flux solution scaled by the current
//! biomass:
//!
//! ```text
//! dX/dt = μ   · X · g(S)
//! dS/dt = v_s · X · g(S)
//! dP/dt = v_p · X · g(S)
//!
//! g(S) = 1 if S > 0, 0 otherwise
//! ```
//!
//! The substrate gate `g` stops every rate once the carbon source is gone,
//! so no component is driven negative by a stale uptake rate. Because the
//! same law is used for both stages, switching regimes changes the slope of
//! the trajectory but never its value.

use crate::error::Result;
use crate::physics::{ConcentrationState, ExchangeRates, FluxConvention, FluxVector, KineticModel};

/// Biomass-proportional kinetics driven by one flux regime
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeKinetics {
    rates: ExchangeRates,
}

impl ExchangeKinetics {
    /// Build directly from the three rates
    pub fn new(growth: f64, substrate: f64, product: f64) -> Self {
        Self {
            rates: ExchangeRates {
                growth,
                substrate,
                product,
            },
        }
    }

    /// Build from a flux vector read through `convention`
    ///
    /// # Errors
    ///
    /// Fails if a referenced index is out of range or not finite.
    pub fn from_fluxes(fluxes: &FluxVector, convention: &FluxConvention) -> Result<Self> {
        Ok(Self {
            rates: convention.exchange_rates(fluxes)?,
        })
    }

    pub fn rates(&self) -> &ExchangeRates {
        &self.rates
    }
}

impl KineticModel for ExchangeKinetics {
    fn compute_physics(&self, state: &ConcentrationState) -> ConcentrationState {
        if state.substrate() <= 0.0 {
            return ConcentrationState::zeros();
        }

        let biomass = state.biomass();
        ConcentrationState::new(
            self.rates.growth * biomass,
            self.rates.substrate * biomass,
            self.rates.product * biomass,
        )
    }

    fn name(&self) -> &str {
        "Exchange kinetics"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_scale_with_biomass() {
        let model = ExchangeKinetics::new(0.5, -2.0, 1.0);
        let state = ConcentrationState::new(2.0, 10.0, 0.0);

        let slope = model.compute_physics(&state);
        assert_eq!(slope.to_array(), [1.0, -4.0, 2.0]);
    }

    #[test]
    fn test_no_substrate_no_change() {
        let model = ExchangeKinetics::new(0.5, -2.0, 1.0);

        for substrate in [0.0, -1e-9] {
            let state = ConcentrationState::new(2.0, substrate, 3.0);
            assert_eq!(model.compute_physics(&state), ConcentrationState::zeros());
        }
    }

    #[test]
    fn test_from_fluxes_uses_convention() {
        let convention = FluxConvention {
            growth: 2,
            substrate_uptake: 1,
            product_secretion: 0,
        };
        let model =
            ExchangeKinetics::from_fluxes(&FluxVector::from([3.0, -7.0, 0.1]), &convention).unwrap();

        assert_eq!(model.rates().growth, 0.1);
        assert_eq!(model.rates().substrate, -7.0);
        assert_eq!(model.rates().product, 3.0);
    }
}
