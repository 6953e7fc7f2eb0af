//! Simulation scenario definition
//!
//! A scenario combines an initial state with a regime schedule: one or more
//! kinetic models, each active from its start time until the next one takes
//! over.

use crate::error::{FermentationError, Result};
use crate::physics::{ConcentrationState, KineticModel};

/// One flux regime and the time it becomes active
#[derive(Clone, Copy)]
pub struct Stage<'a> {
    /// Activation time; `f64::NEG_INFINITY` for the opening regime
    pub start: f64,

    /// Kinetics while this regime is active
    pub model: &'a dyn KineticModel,
}

/// Simulation scenario
///
/// This is the "WHAT to solve" (not "HOW to solve"). Models are borrowed,
/// so building a scenario per optimizer evaluation costs one small
/// allocation for the schedule.
///
/// # Examples
///
/// ```rust
/// use ferment_rs::models::ExchangeKinetics;
/// use ferment_rs::physics::ConcentrationState;
/// use ferment_rs::solver::Scenario;
///
/// let growth = ExchangeKinetics::new(0.5, -1.0, 0.0);
/// let production = ExchangeKinetics::new(0.0, -1.0, 0.8);
/// let initial = ConcentrationState::new(0.1, 10.0, 0.0);
///
/// let scenario = Scenario::two_stage(&growth, &production, 4.0, initial);
/// assert_eq!(scenario.model_at(1.0).name(), "Exchange kinetics");
/// assert_eq!(scenario.breakpoints_within(0.0, 10.0).collect::<Vec<_>>(), vec![4.0]);
/// ```
pub struct Scenario<'a> {
    /// Conditions at the first timepoint
    pub initial_state: ConcentrationState,

    /// Regimes sorted by start time
    stages: Vec<Stage<'a>>,
}

impl<'a> Scenario<'a> {
    /// Single regime for the whole horizon
    pub fn single(model: &'a dyn KineticModel, initial_state: ConcentrationState) -> Self {
        Self {
            initial_state,
            stages: vec![Stage {
                start: f64::NEG_INFINITY,
                model,
            }],
        }
    }

    /// Stage one until `switch_time`, stage two from then on
    ///
    /// A switch at or before the first timepoint runs stage two only; a
    /// switch at or after the last timepoint runs stage one only.
    pub fn two_stage(
        stage_one: &'a dyn KineticModel,
        stage_two: &'a dyn KineticModel,
        switch_time: f64,
        initial_state: ConcentrationState,
    ) -> Self {
        Self {
            initial_state,
            stages: vec![
                Stage {
                    start: f64::NEG_INFINITY,
                    model: stage_one,
                },
                Stage {
                    start: switch_time,
                    model: stage_two,
                },
            ],
        }
    }

    /// Verifying scenario content
    pub fn validate(&self) -> Result<()> {
        if self.stages.is_empty() {
            return Err(FermentationError::InvalidConfiguration(
                "scenario has no flux regime".to_string(),
            ));
        }
        if self.stages.iter().any(|stage| stage.start.is_nan()) {
            return Err(FermentationError::InvalidConfiguration(
                "regime start time is NaN".to_string(),
            ));
        }
        if self.stages.windows(2).any(|w| w[1].start < w[0].start) {
            return Err(FermentationError::InvalidConfiguration(
                "regimes must be ordered by start time".to_string(),
            ));
        }
        if let Some((name, value)) = self.initial_state.first_non_finite() {
            return Err(FermentationError::InvalidConfiguration(format!(
                "initial {} is not finite: {}",
                name, value
            )));
        }
        Ok(())
    }

    /// Regime in force on an interval starting at `t`
    pub fn model_at(&self, t: f64) -> &'a dyn KineticModel {
        self.stages
            .iter()
            .rev()
            .find(|stage| stage.start <= t)
            .unwrap_or(&self.stages[0])
            .model
    }

    /// Regime start times strictly inside `(start, end)`
    pub fn breakpoints_within(&self, start: f64, end: f64) -> impl Iterator<Item = f64> + '_ {
        self.stages
            .iter()
            .map(|stage| stage.start)
            .filter(move |&t| t > start && t < end)
    }
}

impl std::fmt::Debug for Scenario<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("initial state", &self.initial_state)
            .field(
                "regime starts",
                &self.stages.iter().map(|s| s.start).collect::<Vec<_>>(),
            )
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
