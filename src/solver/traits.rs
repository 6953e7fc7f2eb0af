//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! - `Solver` trait: one fixed-size step of a time-stepping method, plus a
//!   shared driver (`solve`) that handles sampling, regime switches and
//!   substrate depletion the same way for every method
//! - `SolverConfiguration`: the output sample grid and the number of
//!   internal steps per sample interval
//! - `IntegrationMethod`: serialisable method selector used by `Settings`

use crate::error::{FermentationError, Result};
use crate::physics::{ConcentrationState, KineticModel};
use crate::solver::methods::{EulerSolver, RK4Solver};
use crate::solver::{Scenario, Trajectory};
use serde::{Deserialize, Serialize};

// =================================================================================================
// Solver trait
// =================================================================================================

/// Explicit fixed-step time integrator
///
/// Implementors provide a single step; [`Solver::solve`] turns it into a
/// full sampled trajectory.
pub trait Solver: Send + Sync {
    /// Advance `state` by `dt` under `model`
    fn step(
        &self,
        model: &dyn KineticModel,
        state: &ConcentrationState,
        dt: f64,
    ) -> ConcentrationState;

    /// Right-hand side evaluations per step
    fn evaluations_per_step(&self) -> usize;

    /// Name of the method (used to display and logging)
    fn name(&self) -> &'static str;

    /// Integrate `scenario` over the sample grid of `config`
    ///
    /// Stops early, with the last sample at the depletion instant, when
    /// substrate runs out.
    ///
    /// # Errors
    ///
    /// Invalid grid, invalid schedule, or a non-finite state.
    fn solve(&self, scenario: &Scenario<'_>, config: &SolverConfiguration) -> Result<Trajectory> {
        crate::solver::integrate(self, scenario, config)
    }
}

// =================================================================================================
// Integration method selector
// =================================================================================================

/// Available time-stepping methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMethod {
    /// Classical fourth-order Runge-Kutta
    #[default]
    Rk4,
    /// Forward Euler
    Euler,
}

static RK4: RK4Solver = RK4Solver;
static EULER: EulerSolver = EulerSolver;

impl IntegrationMethod {
    /// Stateless solver instance for this method
    pub fn solver(&self) -> &'static dyn Solver {
        match self {
            IntegrationMethod::Rk4 => &RK4,
            IntegrationMethod::Euler => &EULER,
        }
    }
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Sample grid and step refinement
///
/// # Examples
///
/// ```rust
/// use ferment_rs::solver::SolverConfiguration;
///
/// // 11 samples over [0, 10], 20 steps between consecutive samples
/// let config = SolverConfiguration::time_evolution(10.0, 11, 20);
/// assert_eq!(config.timepoints.len(), 11);
/// assert_eq!(config.timepoints[10], 10.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Strictly increasing output times
    pub timepoints: Vec<f64>,

    /// Integration steps per sample interval
    pub substeps: usize,
}

impl SolverConfiguration {
    /// Use a caller-supplied sample grid
    pub fn sampled(timepoints: Vec<f64>, substeps: usize) -> Self {
        Self {
            timepoints,
            substeps,
        }
    }

    /// Evenly spaced grid of `points` samples over `[0, total_time]`
    pub fn time_evolution(total_time: f64, points: usize, substeps: usize) -> Self {
        Self::sampled(linspace(0.0, total_time, points), substeps)
    }

    /// Validate the grid
    pub fn validate(&self) -> Result<()> {
        if self.timepoints.is_empty() {
            return Err(FermentationError::InvalidConfiguration(
                "at least one timepoint is required".to_string(),
            ));
        }
        if self.substeps == 0 {
            return Err(FermentationError::InvalidConfiguration(
                "substeps must be greater than 0".to_string(),
            ));
        }
        if let Some(t) = self.timepoints.iter().find(|t| !t.is_finite()) {
            return Err(FermentationError::InvalidConfiguration(format!(
                "timepoint {} is not finite",
                t
            )));
        }
        if let Some(pair) = self.timepoints.windows(2).find(|w| w[1] <= w[0]) {
            return Err(FermentationError::InvalidConfiguration(format!(
                "timepoints must be strictly increasing, got {} then {}",
                pair[0], pair[1]
            )));
        }
        Ok(())
    }
}

/// `points` evenly spaced values from `start` to `end` inclusive
///
/// Each value is computed from its index rather than by accumulation, so
/// the last value is exactly `end`.
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let span = end - start;
            let last = (points - 1) as f64;
            (0..points)
                .map(|i| {
                    if i == points - 1 {
                        end
                    } else {
                        start + span * (i as f64) / last
                    }
                })
                .collect()
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
