//! Kinetic models with closed-form solutions

use ferment_rs::physics::{ConcentrationState, KineticModel};

/// dX/dt = rate·X, substrate and product untouched
///
/// Exact solution: X(t) = X₀·exp(rate·t)
pub struct ExponentialGrowth {
    pub rate: f64,
}

impl ExponentialGrowth {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    pub fn exact_biomass(&self, initial: f64, t: f64) -> f64 {
        initial * (self.rate * t).exp()
    }
}

impl KineticModel for ExponentialGrowth {
    fn compute_physics(&self, state: &ConcentrationState) -> ConcentrationState {
        ConcentrationState::new(self.rate * state.biomass(), 0.0, 0.0)
    }

    fn name(&self) -> &str {
        "Exponential growth"
    }
}

/// Constant conversion of substrate into product, not gated on substrate
///
/// Substrate reaches zero at exactly S₀ / rate.
pub struct LinearUptake {
    pub rate: f64,
}

impl LinearUptake {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl KineticModel for LinearUptake {
    fn compute_physics(&self, _state: &ConcentrationState) -> ConcentrationState {
        ConcentrationState::new(0.0, -self.rate, self.rate)
    }

    fn name(&self) -> &str {
        "Linear uptake"
    }
}
