//! Numerical solvers
//!
//! A numerical solver applies a time-stepping method to the kinetics of a
//! scenario and returns a sampled trajectory.
//!
//! # The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Initial concentrations
//!    - Regime schedule (which kinetics are active when)
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to sample
//!    - Output timepoints
//!    - Steps per sample interval
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - A single fixed step (Euler, RK4)
//!    - The shared driver in this module does everything else
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐   ┌──────────────────────┐
//! │ Scenario        │   │ Solver Configuration │
//! │ (state+regimes) │   │ (grid + substeps)    │
//! └────────┬────────┘   └──────────┬───────────┘
//!          └────────────┬───────────┘
//!              ┌────────▼────────┐
//!              │ integrate()     │ ← segments, depletion, validation
//!              │  Solver::step   │ ← Euler, RK4
//!              └────────┬────────┘
//!              ┌────────▼────────┐
//!              │ Trajectory      │
//!              └─────────────────┘
//! ```
//!
//! # Segments
//!
//! Every sample interval `[tᵢ, tᵢ₊₁]` is integrated with `substeps` equal
//! steps. A regime start strictly inside the interval splits it in two, and
//! each piece gets its own `substeps` steps, so the switch instant is hit
//! exactly. State is continuous across the switch; only the slope changes.
//!
//! # Substrate depletion
//!
//! When a step would take substrate from positive to zero or below, the
//! step length at which substrate reaches zero is located by bisection, the
//! state there is recorded with substrate set to exactly zero, and
//! integration stops. The trajectory then ends before the requested horizon.
//!
//! # Error Handling
//!
//! Common errors:
//! - Invalid configuration (empty or non-monotonic grid, zero substeps)
//! - Invalid scenario (NaN switch time, non-finite initial state)
//! - Numerical instability (NaN or Inf state)

// =================================================================================================
// Module Declarations
// =================================================================================================
mod methods;
mod scenario;
mod traits;
mod trajectory;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{linspace, IntegrationMethod, Solver, SolverConfiguration};

pub use scenario::{Scenario, Stage};
pub use trajectory::Trajectory;

pub use methods::{EulerSolver, RK4Solver};

// =================================================================================================
// Shared integration driver
// =================================================================================================

use crate::error::{FermentationError, Result};
use crate::physics::{ConcentrationState, KineticModel};

/// Bisection iterations when locating substrate depletion inside a step
const DEPLETION_BISECTION_ITERATIONS: usize = 64;

/// Outcome of integrating one segment
enum Advance {
    Reached(ConcentrationState),
    Depleted { time: f64, state: ConcentrationState },
}

/// Integrate `scenario` over the grid of `config` with `solver`'s step
pub(crate) fn integrate<S: Solver + ?Sized>(
    solver: &S,
    scenario: &Scenario<'_>,
    config: &SolverConfiguration,
) -> Result<Trajectory> {
    config.validate()?;
    scenario.validate()?;

    let times = &config.timepoints;
    let mut state = scenario.initial_state;
    let mut trajectory = Trajectory::new(times[0], state, times.len());

    for window in times.windows(2) {
        let (start, end) = (window[0], window[1]);
        let mut cursor = start;

        let segment_ends = scenario
            .breakpoints_within(start, end)
            .chain(std::iter::once(end));

        for segment_end in segment_ends {
            let model = scenario.model_at(cursor);

            match advance(solver, model, state, cursor, segment_end, config.substeps)? {
                Advance::Reached(next) => state = next,
                Advance::Depleted { time, state: depleted } => {
                    trajectory.push_depletion(time, depleted);
                    return Ok(trajectory);
                }
            }

            cursor = segment_end;
        }

        trajectory.push(end, state);
    }

    Ok(trajectory)
}

/// Integrate one segment `[start, end]` under a single regime
fn advance<S: Solver + ?Sized>(
    solver: &S,
    model: &dyn KineticModel,
    mut state: ConcentrationState,
    start: f64,
    end: f64,
    substeps: usize,
) -> Result<Advance> {
    let dt = (end - start) / (substeps as f64);

    for step in 0..substeps {
        // Computed from the index to avoid accumulating rounding error
        let t = start + (step as f64) * dt;
        let next = solver.step(model, &state, dt);

        if state.substrate() > 0.0 && next.substrate() <= 0.0 {
            let (offset, depleted) = locate_depletion(solver, model, &state, dt);
            validate_state(&depleted, t + offset)?;
            return Ok(Advance::Depleted {
                time: t + offset,
                state: depleted,
            });
        }

        validate_state(&next, t + dt)?;
        state = next;
    }

    Ok(Advance::Reached(state))
}

/// Find the step length within `(0, dt]` at which substrate reaches zero
///
/// Returns that length and the state there, with substrate pinned to 0.
fn locate_depletion<S: Solver + ?Sized>(
    solver: &S,
    model: &dyn KineticModel,
    state: &ConcentrationState,
    dt: f64,
) -> (f64, ConcentrationState) {
    let (mut low, mut high) = (0.0, dt);

    for _ in 0..DEPLETION_BISECTION_ITERATIONS {
        let middle = 0.5 * (low + high);
        if middle <= low || middle >= high {
            break;
        }
        if solver.step(model, state, middle).substrate() > 0.0 {
            low = middle;
        } else {
            high = middle;
        }
    }

    let mut depleted = solver.step(model, state, high);
    depleted.set_substrate(0.0);
    (high, depleted)
}

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Validate a state for numerical issues
///
/// NaN or Inf can only arise from overflow with absurd flux magnitudes;
/// substrate exhaustion is handled by the kinetics and never lands here.
pub(crate) fn validate_state(state: &ConcentrationState, time: f64) -> Result<()> {
    match state.first_non_finite() {
        Some((quantity, value)) => Err(FermentationError::NumericalInstability {
            time,
            quantity,
            value,
        }),
        None => Ok(()),
    }
}

// =================================================================================================
// Tests
// =================================================================================================
