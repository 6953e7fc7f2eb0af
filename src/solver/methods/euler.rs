//! Forward Euler numerical solver
//!
//! # Mathematical Background
//!
//! ```text
//! y_{n+1} = y_n + dt * f(y_n)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (error ~ O(dt))
//! - **Complexity**: 1 function evaluation per step
//!
//! # When to Use
//!
//! - Quick exploratory screens with many substeps
//! - Cross-checking the RK4 results
//!
//! For switch-time optimisation prefer [`RK4Solver`](crate::solver::RK4Solver):
//! the biomass grows exponentially, and the first-order error of Euler
//! compounds into a visible bias in the optimal switch time.

use crate::physics::{ConcentrationState, KineticModel};
use crate::solver::Solver;

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler time-stepping solver
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Euler solver
    pub fn new() -> Self {
        Self
    }
}

impl Solver for EulerSolver {
    fn step(
        &self,
        model: &dyn KineticModel,
        state: &ConcentrationState,
        dt: f64,
    ) -> ConcentrationState {
        *state + model.compute_physics(state) * dt
    }

    fn evaluations_per_step(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
