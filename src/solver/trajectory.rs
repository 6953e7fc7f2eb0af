//! Sampled concentration trajectory

use crate::physics::ConcentrationState;
use ndarray::Array2;

/// Time-sampled sequence of concentration states
///
/// Never empty: the initial sample is stored at construction. Times are
/// strictly increasing. When substrate ran out, the last sample sits at the
/// depletion instant and [`Trajectory::depletion_time`] reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    time: Vec<f64>,
    states: Vec<ConcentrationState>,
    depletion_time: Option<f64>,
}

impl Trajectory {
    /// Start a trajectory at `(time, state)`
    pub fn new(time: f64, state: ConcentrationState, capacity: usize) -> Self {
        let mut times = Vec::with_capacity(capacity.max(1));
        let mut states = Vec::with_capacity(capacity.max(1));
        times.push(time);
        states.push(state);

        Self {
            time: times,
            states,
            depletion_time: None,
        }
    }

    pub(crate) fn push(&mut self, time: f64, state: ConcentrationState) {
        self.time.push(time);
        self.states.push(state);
    }

    /// Record the terminal depletion sample
    ///
    /// A depletion instant indistinguishable from the previous sample
    /// replaces it, keeping times strictly increasing.
    pub(crate) fn push_depletion(&mut self, time: f64, state: ConcentrationState) {
        let last = self.end_time();
        if time <= last + 1e-12 * (1.0 + last.abs()) {
            let index = self.states.len() - 1;
            self.states[index] = state;
        } else {
            self.push(time, state);
        }
        self.depletion_time = Some(self.end_time());
    }

    /// Sample times
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Sampled states, aligned with [`Trajectory::time`]
    pub fn states(&self) -> &[ConcentrationState] {
        &self.states
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn start_time(&self) -> f64 {
        self.time[0]
    }

    /// Time of the last sample (the realized horizon)
    pub fn end_time(&self) -> f64 {
        self.time[self.time.len() - 1]
    }

    /// Time actually simulated
    pub fn elapsed(&self) -> f64 {
        self.end_time() - self.start_time()
    }

    pub fn initial_state(&self) -> &ConcentrationState {
        &self.states[0]
    }

    pub fn final_state(&self) -> &ConcentrationState {
        &self.states[self.states.len() - 1]
    }

    /// Instant at which substrate ran out, if it did
    pub fn depletion_time(&self) -> Option<f64> {
        self.depletion_time
    }

    /// True when integration stopped on substrate depletion
    pub fn is_depleted(&self) -> bool {
        self.depletion_time.is_some()
    }

    /// Iterate over `(time, state)` samples
    pub fn iter(&self) -> impl Iterator<Item = (f64, &ConcentrationState)> {
        self.time.iter().copied().zip(self.states.iter())
    }

    /// States as an `n × 3` matrix (biomass, substrate, product columns)
    pub fn to_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.states.len(), 3), |(row, column)| {
            self.states[row].to_array()[column]
        })
    }
}
