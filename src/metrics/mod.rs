//! Fermentation performance metrics
//!
//! Pure functions of a trajectory (and the settings, for weighted scores).
//! Every metric is defined for every trajectory: degenerate cases such as
//! zero elapsed time or zero substrate consumption return 0, and any
//! non-finite intermediate is reported as 0 instead of NaN or infinity.
//!
//! | Metric               | Formula                                         |
//! |----------------------|-------------------------------------------------|
//! | `batch_productivity` | (P_end − P₀) / (t_end − t₀)                     |
//! | `batch_yield`        | (P_end − P₀) / (S₀ − S_end)                     |
//! | `batch_end_titer`    | P_end                                           |
//! | `dupont_metric`      | 0.8·yield + 0.1·titer + 0.1·productivity        |
//! | `linear_combination` | settings-weighted productivity + yield + titer  |

mod objective;

pub use objective::{FermentationMetrics, MetricFn, Objective};

use crate::config::Settings;
use crate::solver::Trajectory;

/// Substrate consumption below which yield is reported as 0
pub const MIN_CONSUMPTION: f64 = 1e-12;

/// Weight of yield in [`dupont_metric`]
pub const DUPONT_YIELD_WEIGHT: f64 = 0.8;
/// Weight of titer in [`dupont_metric`]
pub const DUPONT_TITER_WEIGHT: f64 = 0.1;
/// Weight of productivity in [`dupont_metric`]
pub const DUPONT_PRODUCTIVITY_WEIGHT: f64 = 0.1;

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Net product formed per unit of elapsed time
pub fn batch_productivity(trajectory: &Trajectory, _settings: &Settings) -> f64 {
    let elapsed = trajectory.elapsed();
    if !elapsed.is_finite() || elapsed <= 0.0 {
        return 0.0;
    }

    let formed = trajectory.final_state().product() - trajectory.initial_state().product();
    finite_or_zero(formed / elapsed)
}

/// Net product formed per unit of substrate consumed
pub fn batch_yield(trajectory: &Trajectory, _settings: &Settings) -> f64 {
    let initial = trajectory.initial_state();
    let last = trajectory.final_state();

    let consumed = initial.substrate() - last.substrate();
    if !consumed.is_finite() || consumed <= MIN_CONSUMPTION {
        return 0.0;
    }

    finite_or_zero((last.product() - initial.product()) / consumed)
}

/// Product concentration at the end of the batch
pub fn batch_end_titer(trajectory: &Trajectory, _settings: &Settings) -> f64 {
    finite_or_zero(trajectory.final_state().product())
}

/// Fixed-weight blend of yield, titer and productivity
pub fn dupont_metric(trajectory: &Trajectory, settings: &Settings) -> f64 {
    finite_or_zero(
        DUPONT_YIELD_WEIGHT * batch_yield(trajectory, settings)
            + DUPONT_TITER_WEIGHT * batch_end_titer(trajectory, settings)
            + DUPONT_PRODUCTIVITY_WEIGHT * batch_productivity(trajectory, settings),
    )
}

/// Settings-weighted sum of productivity, yield and titer
pub fn linear_combination(trajectory: &Trajectory, settings: &Settings) -> f64 {
    finite_or_zero(
        settings.productivity_coefficient * batch_productivity(trajectory, settings)
            + settings.yield_coefficient * batch_yield(trajectory, settings)
            + settings.titer_coefficient * batch_end_titer(trajectory, settings),
    )
}
