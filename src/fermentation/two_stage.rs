//! Two-stage fermentation run
//!
//! Construction does all the work: resolve the objective, search the switch
//! time, integrate the final timecourse at that switch time and score it.
//! The run is immutable afterwards.

use crate::config::Settings;
use crate::error::Result;
use crate::fermentation::FermentationRun;
use crate::metrics::{FermentationMetrics, Objective};
use crate::optimizer::{SwitchTimeOptimization, optimal_switch_time};
use crate::physics::FluxVector;
use crate::solver::Trajectory;
use crate::timecourse::TimecourseIntegrator;
use tracing::debug;

/// Growth stage followed by a production stage at the optimal switch time
#[derive(Debug, Clone)]
pub struct TwoStageFermentation {
    stage_one: FluxVector,
    stage_two: FluxVector,
    settings: Settings,
    objective: Objective,
    optimization: SwitchTimeOptimization,
    trajectory: Trajectory,
    metrics: FermentationMetrics,
    objective_value: f64,
}

impl TwoStageFermentation {
    /// Optimise the switch time and simulate the resulting batch
    ///
    /// Productivity, yield and titer are reported as 0 when the batch makes a
    /// net loss. The composite scores keep their sign.
    ///
    /// # Errors
    ///
    /// Invalid settings, flux vectors that do not fit the flux convention,
    /// or a numerically unstable integration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferment_rs::physics::FluxVector;
    /// use ferment_rs::{FermentationRun, Settings, TwoStageFermentation};
    ///
    /// let settings = Settings {
    ///     initial_biomass: 0.1,
    ///     initial_substrate: 10.0,
    ///     time_end: 10.0,
    ///     num_timepoints: 50,
    ///     ..Settings::default()
    /// };
    ///
    /// let run = TwoStageFermentation::new(
    ///     FluxVector::from([0.5, -1.0, 0.0]),
    ///     FluxVector::from([0.0, -1.0, 0.8]),
    ///     &settings,
    /// )?;
    ///
    /// assert!(run.optimal_switch_time() > 0.0);
    /// assert!(run.objective_value() > 0.0);
    /// # Ok::<(), ferment_rs::FermentationError>(())
    /// ```
    pub fn new(stage_one: FluxVector, stage_two: FluxVector, settings: &Settings) -> Result<Self> {
        settings.validate()?;

        let objective = Objective::resolve(&settings.objective);
        let integrator = TimecourseIntegrator::from_settings(settings);
        let initial = settings.initial_state();

        let optimization = optimal_switch_time(
            &integrator,
            initial,
            settings.time_end,
            [&stage_one, &stage_two],
            settings,
            objective,
        )?;

        let trajectory = integrator.two_stage(
            initial,
            settings.time_end,
            optimization.switch_time,
            [&stage_one, &stage_two],
            settings.num_timepoints,
        )?;

        let metrics = FermentationMetrics::compute(&trajectory, settings).clamp_losses();
        let objective_value = metrics.get(objective);

        debug!(
            %objective,
            switch_time = optimization.switch_time,
            objective_value,
            converged = optimization.converged,
            time_end = trajectory.end_time(),
            "two-stage fermentation complete"
        );

        Ok(Self {
            stage_one,
            stage_two,
            settings: settings.clone(),
            objective,
            optimization,
            trajectory,
            metrics,
            objective_value,
        })
    }

    pub fn stage_one_fluxes(&self) -> &FluxVector {
        &self.stage_one
    }

    pub fn stage_two_fluxes(&self) -> &FluxVector {
        &self.stage_two
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Switch time the final timecourse was simulated with
    pub fn optimal_switch_time(&self) -> f64 {
        self.optimization.switch_time
    }

    /// Full outcome of the switch-time search
    pub fn optimization(&self) -> &SwitchTimeOptimization {
        &self.optimization
    }
}

impl FermentationRun for TwoStageFermentation {
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
