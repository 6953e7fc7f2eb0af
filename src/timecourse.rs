//! Timecourse integrator
//!
//! Turns flux vectors into trajectories. Two entry points:
//!
//! - [`TimecourseIntegrator::two_stage`]: `num_points` evenly spaced samples
//!   over `[0, time_end]`, stage-one fluxes before `switch_time` and
//!   stage-two fluxes from then on
//! - [`TimecourseIntegrator::one_stage`]: a caller-supplied grid and a single
//!   flux vector
//!
//! Both stop early on substrate depletion; the returned trajectory's last
//! time is then the realized horizon.
//!
//! The integrator holds no state besides its options, so the switch-time
//! optimizer can call it thousands of times per run.

use crate::config::Settings;
use crate::error::Result;
use crate::models::ExchangeKinetics;
use crate::physics::{ConcentrationState, FluxConvention, FluxVector};
use crate::solver::{IntegrationMethod, Scenario, SolverConfiguration, Trajectory, linspace};

/// Integration options shared by every timecourse of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimecourseIntegrator {
    convention: FluxConvention,
    method: IntegrationMethod,
    substeps: usize,
}

impl TimecourseIntegrator {
    pub fn new(convention: FluxConvention, method: IntegrationMethod, substeps: usize) -> Self {
        Self {
            convention,
            method,
            substeps,
        }
    }

    /// Options taken from run settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.flux_convention,
            settings.integration_method,
            settings.integration_substeps,
        )
    }

    pub fn convention(&self) -> &FluxConvention {
        &self.convention
    }

    /// Stage one before `switch_time`, stage two from then on
    ///
    /// `switch_time <= 0` runs stage two only, `switch_time >= time_end`
    /// runs stage one only.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferment_rs::physics::{ConcentrationState, FluxVector};
    /// use ferment_rs::{Settings, TimecourseIntegrator};
    ///
    /// let integrator = TimecourseIntegrator::from_settings(&Settings::default());
    /// let growth = FluxVector::from([0.5, -1.0, 0.0]);
    /// let production = FluxVector::from([0.0, -1.0, 0.8]);
    ///
    /// let trajectory = integrator.two_stage(
    ///     ConcentrationState::new(0.1, 10.0, 0.0),
    ///     10.0,
    ///     5.0,
    ///     [&growth, &production],
    ///     50,
    /// )?;
    /// assert_eq!(trajectory.len(), 50);
    /// assert!(trajectory.final_state().product() > 0.0);
    /// # Ok::<(), ferment_rs::FermentationError>(())
    /// ```
    pub fn two_stage(
        &self,
        initial: ConcentrationState,
        time_end: f64,
        switch_time: f64,
        fluxes: [&FluxVector; 2],
        num_points: usize,
    ) -> Result<Trajectory> {
        let stage_one = ExchangeKinetics::from_fluxes(fluxes[0], &self.convention)?;
        let stage_two = ExchangeKinetics::from_fluxes(fluxes[1], &self.convention)?;

        self.two_stage_kinetics(initial, time_end, switch_time, &stage_one, &stage_two, num_points)
    }

    /// [`two_stage`](Self::two_stage) with kinetics already extracted
    pub(crate) fn two_stage_kinetics(
        &self,
        initial: ConcentrationState,
        time_end: f64,
        switch_time: f64,
        stage_one: &ExchangeKinetics,
        stage_two: &ExchangeKinetics,
        num_points: usize,
    ) -> Result<Trajectory> {
        let scenario = Scenario::two_stage(stage_one, stage_two, switch_time, initial);
        let config = SolverConfiguration::time_evolution(time_end, num_points, self.substeps);

        self.method.solver().solve(&scenario, &config)
    }

    /// Single flux regime over a caller-supplied grid
    ///
    /// The returned trajectory carries its own time sequence, which is a
    /// prefix of `timepoints` (plus the depletion instant) when substrate
    /// ran out.
    pub fn one_stage(
        &self,
        initial: ConcentrationState,
        timepoints: &[f64],
        fluxes: &FluxVector,
    ) -> Result<Trajectory> {
        let kinetics = ExchangeKinetics::from_fluxes(fluxes, &self.convention)?;
        let scenario = Scenario::single(&kinetics, initial);
        let config = SolverConfiguration::sampled(timepoints.to_vec(), self.substeps);

        self.method.solver().solve(&scenario, &config)
    }

    /// Evenly spaced one-stage run over `[0, time_end]`
    pub fn one_stage_evenly(
        &self,
        initial: ConcentrationState,
        time_end: f64,
        num_points: usize,
        fluxes: &FluxVector,
    ) -> Result<Trajectory> {
        self.one_stage(initial, &linspace(0.0, time_end, num_points), fluxes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FermentationError;

    fn integrator() -> TimecourseIntegrator {
        TimecourseIntegrator::new(FluxConvention::default(), IntegrationMethod::Rk4, 20)
    }

    fn initial() -> ConcentrationState {
        ConcentrationState::new(0.1, 10.0, 0.0)
    }

    fn growth() -> FluxVector {
        FluxVector::from([0.5, -1.0, 0.0])
    }

    fn production() -> FluxVector {
        FluxVector::from([0.0, -1.0, 0.8])
    }

    #[test]
    fn test_switch_at_zero_matches_pure_stage_two() {
        let two_stage = integrator()
            .two_stage(initial(), 10.0, 0.0, [&growth(), &production()], 50)
            .unwrap();
        let pure = integrator()
            .one_stage_evenly(initial(), 10.0, 50, &production())
            .unwrap();

        assert_eq!(two_stage.len(), pure.len());
        for (a, b) in two_stage.states().iter().zip(pure.states()) {
            assert!(a.max_abs_diff(b) < 1e-12);
        }
    }

    #[test]
    fn test_switch_at_horizon_matches_pure_stage_one() {
        let two_stage = integrator()
            .two_stage(initial(), 10.0, 10.0, [&growth(), &production()], 50)
            .unwrap();
        let pure = integrator()
            .one_stage_evenly(initial(), 10.0, 50, &growth())
            .unwrap();

        assert_eq!(two_stage.time(), pure.time());
        for (a, b) in two_stage.states().iter().zip(pure.states()) {
            assert!(a.max_abs_diff(b) < 1e-12);
        }
    }

    #[test]
    fn test_state_is_continuous_across_switch() {
        let trajectory = integrator()
            .two_stage(initial(), 10.0, 3.3, [&growth(), &production()], 201)
            .unwrap();

        let jumps = trajectory
            .states()
            .windows(2)
            .map(|w| w[0].max_abs_diff(&w[1]))
            .fold(0.0, f64::max);
        assert!(jumps < 0.5, "largest jump between samples {}", jumps);
    }

    #[test]
    fn test_depletion_in_stage_one_truncates() {
        // Fast growth on little substrate runs out long before the switch
        let hungry = FluxVector::from([1.0, -20.0, 0.0]);
        let trajectory = integrator()
            .two_stage(ConcentrationState::new(0.1, 1.0, 0.0), 10.0, 8.0, [&hungry, &production()], 50)
            .unwrap();

        assert!(trajectory.is_depleted());
        assert!(trajectory.end_time() < 8.0);
        assert_eq!(trajectory.final_state().product(), 0.0);
    }

    #[test]
    fn test_short_flux_vector_is_an_error() {
        let err = integrator()
            .two_stage(initial(), 10.0, 5.0, [&FluxVector::from([0.5]), &production()], 50)
            .unwrap_err();

        assert!(matches!(err, FermentationError::MissingFlux { .. }));
    }

    #[test]
    fn test_one_stage_keeps_caller_grid() {
        let grid = [0.0, 0.5, 2.0, 3.0];
        let trajectory = integrator().one_stage(initial(), &grid, &production()).unwrap();

        assert_eq!(trajectory.time(), &grid);
    }
}
