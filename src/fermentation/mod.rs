//! Fermentation runs
//!
//! A run couples flux vectors with [`Settings`](crate::Settings), simulates
//! the batch at construction and keeps the trajectory, every metric and the
//! headline `objective_value`. Runs own their results and share nothing, so
//! many of them can be evaluated side by side (see [`screening`]).
//!
//! [`FermentationRun`] is the read side both variants share.

mod one_stage;
pub mod screening;
mod two_stage;

pub use one_stage::OneStageFermentation;
pub use screening::{rank_by_objective, screen_one_stage, screen_two_stage};
pub use two_stage::TwoStageFermentation;

use crate::metrics::{FermentationMetrics, Objective};
use crate::physics::ConcentrationState;
use crate::solver::Trajectory;

/// Results of a completed fermentation run
pub trait FermentationRun {
    /// Simulated timecourse
    fn trajectory(&self) -> &Trajectory;

    /// All five metrics of the trajectory
    fn metrics(&self) -> &FermentationMetrics;

    /// Objective the run was scored (and, for two stages, optimised) with
    fn objective(&self) -> Objective;

    /// Value of [`objective`](Self::objective) in [`metrics`](Self::metrics)
    fn objective_value(&self) -> f64;

    /// Sample times of the trajectory
    fn time(&self) -> &[f64] {
        self.trajectory().time()
    }

    /// Realized horizon: the depletion time, or the configured end
    fn time_end(&self) -> f64 {
        self.trajectory().end_time()
    }

    fn final_state(&self) -> &ConcentrationState {
        self.trajectory().final_state()
    }
}
