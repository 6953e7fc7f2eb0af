//! Concentration state of a batch culture
//!
//! The state is the ordered triple (biomass, substrate, product) stored as a
//! stack-allocated `nalgebra::Vector3`. Integration arithmetic (`+`, `* f64`)
//! is overloaded so solvers can write `state + slope * dt` without touching
//! the individual components.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of biomass in the state vector
pub const BIOMASS: usize = 0;
/// Index of substrate in the state vector
pub const SUBSTRATE: usize = 1;
/// Index of product in the state vector
pub const PRODUCT: usize = 2;

/// Biomass, substrate and product concentrations at one instant
///
/// Also used for time derivatives, which share the same layout.
///
/// # Example
///
/// ```rust
/// use ferment_rs::physics::ConcentrationState;
///
/// let state = ConcentrationState::new(0.1, 10.0, 0.0);
/// let slope = ConcentrationState::new(0.05, -0.1, 0.0);
///
/// let next = state + slope * 2.0;
/// assert!((next.biomass() - 0.2).abs() < 1e-12);
/// assert!((next.substrate() - 9.8).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConcentrationState {
    values: Vector3<f64>,
}

impl ConcentrationState {
    /// Create a state from its three components
    pub fn new(biomass: f64, substrate: f64, product: f64) -> Self {
        Self {
            values: Vector3::new(biomass, substrate, product),
        }
    }

    /// All-zero state (also the zero derivative)
    pub fn zeros() -> Self {
        Self {
            values: Vector3::zeros(),
        }
    }

    pub fn biomass(&self) -> f64 {
        self.values[BIOMASS]
    }

    pub fn substrate(&self) -> f64 {
        self.values[SUBSTRATE]
    }

    pub fn product(&self) -> f64 {
        self.values[PRODUCT]
    }

    /// Overwrite the substrate component
    pub fn set_substrate(&mut self, substrate: f64) {
        self.values[SUBSTRATE] = substrate;
    }

    /// Underlying vector
    pub fn as_vector(&self) -> &Vector3<f64> {
        &self.values
    }

    /// Components as a plain array, in (biomass, substrate, product) order
    pub fn to_array(&self) -> [f64; 3] {
        [self.values[BIOMASS], self.values[SUBSTRATE], self.values[PRODUCT]]
    }

    /// First non-finite component, with its name
    pub fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        const NAMES: [&str; 3] = ["biomass", "substrate", "product"];
        self.values
            .iter()
            .zip(NAMES)
            .find(|(value, _)| !value.is_finite())
            .map(|(value, name)| (name, *value))
    }

    /// Largest absolute component-wise difference to another state
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        (self.values - other.values).amax()
    }
}

impl From<[f64; 3]> for ConcentrationState {
    fn from(values: [f64; 3]) -> Self {
        Self::new(values[0], values[1], values[2])
    }
}

// Operator overloading for numerical operations

impl std::ops::Add for ConcentrationState {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            values: self.values + rhs.values,
        }
    }
}

impl std::ops::Mul<f64> for ConcentrationState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self {
            values: self.values * scalar,
        }
    }
}

impl fmt::Display for ConcentrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X = {:.4}, S = {:.4}, P = {:.4}",
            self.biomass(),
            self.substrate(),
            self.product()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_follow_layout() {
        let state = ConcentrationState::new(1.0, 2.0, 3.0);
        assert_eq!(state.biomass(), 1.0);
        assert_eq!(state.substrate(), 2.0);
        assert_eq!(state.product(), 3.0);
        assert_eq!(state.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_addition_and_scaling() {
        let a = ConcentrationState::new(1.0, 10.0, 0.0);
        let b = ConcentrationState::new(0.5, -2.0, 1.5);

        let sum = a + b * 2.0;
        assert_eq!(sum.to_array(), [2.0, 6.0, 3.0]);
    }

    #[test]
    fn test_first_non_finite() {
        let good = ConcentrationState::new(1.0, 2.0, 3.0);
        assert!(good.first_non_finite().is_none());

        let bad = ConcentrationState::new(1.0, f64::NAN, f64::INFINITY);
        let (name, value) = bad.first_non_finite().unwrap();
        assert_eq!(name, "substrate");
        assert!(value.is_nan());
    }

    #[test]
    fn test_max_abs_diff() {
        let a = ConcentrationState::new(1.0, 2.0, 3.0);
        let b = ConcentrationState::new(1.5, 2.0, 1.0);
        assert_eq!(a.max_abs_diff(&b), 2.0);
    }
}
