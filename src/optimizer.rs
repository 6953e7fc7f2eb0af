//! Switch-time optimizer
//!
//! Bounded one-dimensional search for the switch time that maximises an
//! objective metric. `argmin`'s bounded Brent method minimises, so the cost
//! is the negated metric.
//!
//! The search runs in two passes. A coarse scan of evenly spaced switch
//! times, both interval ends included, locates the best sample; bounded
//! Brent then refines the bracket between its neighbours. Boundary optima
//! (all growth or all production) come straight from the scan, and an
//! early plateau caused by substrate depletion cannot hide a narrow peak.
//! A refinement that fails or hits its iteration cap is logged and the best
//! point seen is still used.

use crate::config::Settings;
use crate::error::{FermentationError, Result};
use crate::metrics::Objective;
use crate::models::ExchangeKinetics;
use crate::physics::{ConcentrationState, FluxVector};
use crate::solver::linspace;
use crate::timecourse::TimecourseIntegrator;
use argmin::core::{CostFunction, Error, Executor, TerminationReason, TerminationStatus};
use argmin::solver::brent::BrentOpt;
use tracing::{trace, warn};

/// Outcome of a switch-time search
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchTimeOptimization {
    /// Best switch time, within `[0, time_end]`
    pub switch_time: f64,
    /// Objective value at `switch_time`
    pub objective_value: f64,
    /// False when the search hit its iteration cap or failed outright
    pub converged: bool,
    /// Brent iterations of the refinement pass
    pub iterations: u64,
    /// Termination status reported by the search
    pub status: String,
}

/// Samples of the coarse scan preceding the Brent refinement
const SCAN_POINTS: usize = 41;

/// Negated objective as a function of switch time
struct SwitchTimeProblem<'a> {
    integrator: &'a TimecourseIntegrator,
    settings: &'a Settings,
    objective: Objective,
    initial: ConcentrationState,
    time_end: f64,
    num_points: usize,
    stage_one: ExchangeKinetics,
    stage_two: ExchangeKinetics,
}

impl SwitchTimeProblem<'_> {
    fn evaluate(&self, switch_time: f64) -> Result<f64> {
        let trajectory = self.integrator.two_stage_kinetics(
            self.initial,
            self.time_end,
            switch_time,
            &self.stage_one,
            &self.stage_two,
            self.num_points,
        )?;

        Ok(self.objective.evaluate(&trajectory, self.settings))
    }
}

impl CostFunction for SwitchTimeProblem<'_> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, switch_time: &Self::Param) -> std::result::Result<Self::Output, Error> {
        let value = self.evaluate(*switch_time)?;
        trace!(switch_time = *switch_time, value, "switch time evaluated");
        Ok(-value)
    }
}

/// Find the switch time in `[0, time_end]` maximising `objective`
///
/// # Errors
///
/// Fails only when the flux vectors do not fit the convention, or when no
/// candidate switch time could be integrated at all.
pub fn optimal_switch_time(
    integrator: &TimecourseIntegrator,
    initial: ConcentrationState,
    time_end: f64,
    fluxes: [&FluxVector; 2],
    settings: &Settings,
    objective: Objective,
) -> Result<SwitchTimeOptimization> {
    if !time_end.is_finite() || time_end <= 0.0 {
        return Err(FermentationError::InvalidConfiguration(format!(
            "switch-time search needs a positive horizon, got {}",
            time_end
        )));
    }

    let problem = SwitchTimeProblem {
        integrator,
        settings,
        objective,
        initial,
        time_end,
        num_points: settings.num_timepoints,
        stage_one: ExchangeKinetics::from_fluxes(fluxes[0], integrator.convention())?,
        stage_two: ExchangeKinetics::from_fluxes(fluxes[1], integrator.convention())?,
    };

    let grid = linspace(0.0, time_end, SCAN_POINTS);
    let mut scanned: Option<(usize, f64)> = None;
    let mut first_error = None;

    for (index, &switch_time) in grid.iter().enumerate() {
        match problem.evaluate(switch_time) {
            Ok(value) => {
                if value.is_finite() && scanned.is_none_or(|(_, incumbent)| value > incumbent) {
                    scanned = Some((index, value));
                }
            }
            Err(err) => {
                warn!(switch_time, error = %err, "scanned switch time failed");
                first_error.get_or_insert(err);
            }
        }
    }

    let Some((index, scanned_value)) = scanned else {
        return Err(first_error.unwrap_or_else(|| {
            FermentationError::InvalidConfiguration(
                "no switch time produced a finite objective".to_string(),
            )
        }));
    };

    let mut best = (grid[index], scanned_value);
    let lower = grid[index.saturating_sub(1)];
    let upper = grid[(index + 1).min(grid.len() - 1)];
    trace!(lower, upper, "refining switch time");

    let max_iterations = settings.optimizer_max_iterations;
    let solver = BrentOpt::new(lower, upper);
    let (converged, iterations, status) = match Executor::new(problem, solver)
        .configure(|state| state.max_iters(max_iterations))
        .run()
    {
        Ok(result) => {
            let state = result.state;
            if let Some(switch_time) = state.best_param
                && (-state.best_cost).is_finite()
                && -state.best_cost > best.1
            {
                best = (switch_time.clamp(lower, upper), -state.best_cost);
            }

            let converged = match &state.termination_status {
                TerminationStatus::Terminated(TerminationReason::MaxItersReached)
                | TerminationStatus::NotTerminated => false,
                TerminationStatus::Terminated(_) => true,
            };
            if !converged {
                warn!(
                    status = %state.termination_status,
                    iterations = state.iter,
                    "switch-time search did not converge; using best point found"
                );
            }

            (converged, state.iter, state.termination_status.to_string())
        }
        Err(err) => {
            warn!(error = %err, "switch-time refinement failed; using best scanned point");
            (false, 0, err.to_string())
        }
    };

    let (switch_time, objective_value) = best;
    Ok(SwitchTimeOptimization {
        switch_time,
        objective_value,
        converged,
        iterations,
        status,
    })
}
