//! Numerical methods for integrating the concentration ODEs
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//! Each method only defines a single step; sampling, regime switches and
//! substrate depletion are shared by all of them.
//!
//! # Available Methods
//!
//! - **[`EulerSolver`]**: Forward Euler method
//!   - Order: First-order O(dt)
//!   - Cost: 1 function evaluation per step
//!
//! - **[`RK4Solver`]**: Classical fourth-order Runge-Kutta
//!   - Order: Fourth-order O(dt⁴)
//!   - Cost: 4 function evaluations per step
//!   - Use: **default** for fermentation runs
//!
//! Each solver is stateless and can be shared across threads.

mod euler;
mod rk4;

// Re-exports for convenience
pub use euler::EulerSolver;
pub use rk4::RK4Solver;
