//! Kinetic model trait
//!
//! The model provides the equations, the solver provides the method to
//! integrate them. A model is autonomous: the time dependence of a
//! two-stage fermentation lives in the regime schedule of a
//! [`Scenario`](crate::solver::Scenario), not in the model.

use crate::physics::ConcentrationState;

/// Right-hand side of the concentration ODE system
///
/// # Contract
///
/// - Must never panic or return NaN for a finite state with non-negative
///   biomass; expected biological boundaries (no substrate left) are
///   handled by returning clamped rates.
/// - Must be side-effect free. The switch-time optimizer calls it many
///   thousands of times per run.
pub trait KineticModel: Send + Sync {
    /// Time derivative d(X, S, P)/dt at `state`
    fn compute_physics(&self, state: &ConcentrationState) -> ConcentrationState;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;
}
