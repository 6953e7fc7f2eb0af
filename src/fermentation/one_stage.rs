//! Single-regime fermentation run

use crate::config::Settings;
use crate::error::Result;
use crate::fermentation::FermentationRun;
use crate::metrics::{FermentationMetrics, Objective};
use crate::physics::FluxVector;
use crate::solver::Trajectory;
use crate::timecourse::TimecourseIntegrator;
use tracing::debug;

/// One flux vector over the whole batch
///
/// Metrics are reported exactly as computed: unlike
/// [`TwoStageFermentation`](crate::fermentation::TwoStageFermentation), a net
/// loss shows up as a negative productivity or yield.
#[derive(Debug, Clone)]
pub struct OneStageFermentation {
    fluxes: FluxVector,
    settings: Settings,
    objective: Objective,
    trajectory: Trajectory,
    metrics: FermentationMetrics,
    objective_value: f64,
}

impl OneStageFermentation {
    /// Simulate `settings.num_timepoints` evenly spaced samples over
    /// `[0, settings.time_end]`
    ///
    /// # Errors
    ///
    /// Invalid settings, a flux vector that does not fit the flux
    /// convention, or [`NumericalInstability`] when the state overflows
    /// within the horizon (e.g. unchecked exponential growth). A
    /// two-stage run can avoid such a regime through its switch time; a
    /// one-stage run has no alternative and fails.
    ///
    /// [`NumericalInstability`]: crate::FermentationError::NumericalInstability
    pub fn new(fluxes: FluxVector, settings: &Settings) -> Result<Self> {
        settings.validate()?;

        let objective = Objective::resolve(&settings.objective);
        let trajectory = TimecourseIntegrator::from_settings(settings).one_stage_evenly(
            settings.initial_state(),
            settings.time_end,
            settings.num_timepoints,
            &fluxes,
        )?;

        let metrics = FermentationMetrics::compute(&trajectory, settings);
        let objective_value = metrics.get(objective);

        debug!(
            %objective,
            objective_value,
            time_end = trajectory.end_time(),
            "one-stage fermentation complete"
        );

        Ok(Self {
            fluxes,
            settings: settings.clone(),
            objective,
            trajectory,
            metrics,
            objective_value,
        })
    }

    pub fn fluxes(&self) -> &FluxVector {
        &self.fluxes
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl FermentationRun for OneStageFermentation {
    fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    fn metrics(&self) -> &FermentationMetrics {
        &self.metrics
    }

    fn objective(&self) -> Objective {
        self.objective
    }

    fn objective_value(&self) -> f64 {
        self.objective_value
    }
}
