//! Runge-Kutta 4 (RK4) numerical solver
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method uses a weighted average of
//! four slope estimates:
//!
//! ```text
//! k₁ = f(yₙ)
//! k₂ = f(yₙ + dt/2 · k₁)
//! k₃ = f(yₙ + dt/2 · k₂)
//! k₄ = f(yₙ + dt · k₃)
//!
//! yₙ₊₁ = yₙ + dt/6 · (k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! Kinetic models here are autonomous within a regime, so the stage times
//! do not enter the right-hand side.
//!
//! # Characteristics
//!
//! - **Order**: Fourth-order accurate (global error ~ O(dt⁴))
//! - **Complexity**: 4 function evaluations per step
//! - **Memory**: O(1), the state is a stack `Vector3`
//!
//! # When to Use
//!
//! - **Default for switch-time optimisation** ✅
//! - Exponential growth phases, where Euler's first-order error compounds
//!
//! # Example
//!
//! ```rust
//! use ferment_rs::models::ExchangeKinetics;
//! use ferment_rs::physics::ConcentrationState;
//! use ferment_rs::solver::{RK4Solver, Scenario, Solver, SolverConfiguration};
//!
//! let model = ExchangeKinetics::new(0.2, 0.0, 0.0);
//! let scenario = Scenario::single(&model, ConcentrationState::new(1.0, 1.0, 0.0));
//! let config = SolverConfiguration::time_evolution(5.0, 6, 10);
//!
//! let trajectory = RK4Solver::new().solve(&scenario, &config)?;
//! let exact = (0.2_f64 * 5.0).exp();
//! assert!((trajectory.final_state().biomass() - exact).abs() < 1e-8);
//! # Ok::<(), ferment_rs::FermentationError>(())
//! ```

use crate::physics::{ConcentrationState, KineticModel};
use crate::solver::Solver;

// =================================================================================================
// RK4 Solver
// =================================================================================================

/// Classical fourth-order Runge-Kutta solver
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Solver;

impl RK4Solver {
    /// Create a new RK4 solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferment_rs::solver::{RK4Solver, Solver};
    ///
    /// let solver = RK4Solver::new();
    /// assert_eq!(solver.name(), "Runge Kutta (RK4)");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for RK4Solver {
    fn step(
        &self,
        model: &dyn KineticModel,
        state: &ConcentrationState,
        dt: f64,
    ) -> ConcentrationState {
        // Slope at beginning of interval
        let k1 = model.compute_physics(state);

        // Slopes at midpoint, predicted with k₁ then k₂
        let k2 = model.compute_physics(&(*state + k1 * (dt / 2.0)));
        let k3 = model.compute_physics(&(*state + k2 * (dt / 2.0)));

        // Slope at end, predicted with k₃
        let k4 = model.compute_physics(&(*state + k3 * dt));

        // Simpson's rule weights: endpoints 1/6, midpoints 1/3
        let weighted_slope = k1 + k2 * 2.0 + k3 * 2.0 + k4;

        *state + weighted_slope * (dt / 6.0)
    }

    fn evaluations_per_step(&self) -> usize {
        4
    }

    fn name(&self) -> &'static str {
        "Runge Kutta (RK4)"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExchangeKinetics;
    use crate::solver::{Scenario, SolverConfiguration};

    /// dX/dt = c, independent of state
    struct ConstantGrowth {
        growth_rate: f64,
    }

    impl KineticModel for ConstantGrowth {
        fn compute_physics(&self, _state: &ConcentrationState) -> ConcentrationState {
            ConcentrationState::new(self.growth_rate, 0.0, 0.0)
        }

        fn name(&self) -> &str {
            "Constant Growth"
        }
    }

    #[test]
    fn test_rk4_solver_creation() {
        let solver = RK4Solver::new();
        assert_eq!(solver.name(), "Runge Kutta (RK4)");
        assert_eq!(solver.evaluations_per_step(), 4);
    }

    #[test]
    fn test_rk4_constant_growth_is_exact() {
        let model = ConstantGrowth { growth_rate: 2.0 };
        let scenario = Scenario::single(&model, ConcentrationState::new(0.0, 1.0, 0.0));
        let config = SolverConfiguration::time_evolution(10.0, 11, 10);

        let trajectory = RK4Solver::new().solve(&scenario, &config).unwrap();

        assert!((trajectory.final_state().biomass() - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_rk4_exponential_growth() {
        // Substrate exchange of zero keeps the gate open forever
        let growth_rate = 0.3;
        let model = ExchangeKinetics::new(growth_rate, 0.0, 0.0);
        let scenario = Scenario::single(&model, ConcentrationState::new(1.0, 1.0, 0.0));
        let config = SolverConfiguration::time_evolution(10.0, 101, 1);

        let trajectory = RK4Solver::new().solve(&scenario, &config).unwrap();

        let exact = (growth_rate * 10.0_f64).exp();
        let error = (trajectory.final_state().biomass() - exact).abs() / exact;
        assert!(error < 1e-6, "Relative error {} is too large for RK4", error);
    }

    #[test]
    fn test_rk4_convergence() {
        let growth_rate = 0.3;
        let total_time = 5.0;
        let model = ExchangeKinetics::new(growth_rate, 0.0, 0.0);
        let exact = (growth_rate * total_time).exp();

        let errors: Vec<f64> = [10, 20, 40, 80]
            .iter()
            .map(|&steps| {
                let scenario = Scenario::single(&model, ConcentrationState::new(1.0, 1.0, 0.0));
                let config = SolverConfiguration::time_evolution(total_time, 2, steps);
                let trajectory = RK4Solver::new().solve(&scenario, &config).unwrap();
                (trajectory.final_state().biomass() - exact).abs()
            })
            .collect();

        // error(dt/2) ≈ error(dt) / 16
        for i in 0..errors.len() - 1 {
            let ratio = errors[i] / errors[i + 1];
            assert!(
                ratio > 12.0 && ratio < 20.0,
                "Convergence ratio {} is not fourth-order at step {}",
                ratio,
                i
            );
        }
    }
}
