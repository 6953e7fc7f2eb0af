//! Objective selection
//!
//! The recognised objective names form a closed enumeration. Lookup by name
//! goes through [`Objective::resolve`], which returns [`Objective::DEFAULT`]
//! for any unknown name; both the optimizer objective and the reported
//! `objective_value` use it, so the fallback cannot diverge.

use crate::config::Settings;
use crate::metrics;
use crate::solver::Trajectory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Signature shared by every metric
pub type MetricFn = fn(&Trajectory, &Settings) -> f64;

/// Metric that drives optimisation and is reported as the headline score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    BatchProductivity,
    BatchYield,
    BatchTiter,
    DupontMetric,
    LinearCombination,
}

impl Objective {
    /// Fallback for unrecognised names
    pub const DEFAULT: Objective = Objective::BatchProductivity;

    /// Every objective, in reporting order
    pub const ALL: [Objective; 5] = [
        Objective::BatchProductivity,
        Objective::BatchYield,
        Objective::BatchTiter,
        Objective::DupontMetric,
        Objective::LinearCombination,
    ];

    /// Configuration key of this objective
    pub fn name(&self) -> &'static str {
        match self {
            Objective::BatchProductivity => "batch_productivity",
            Objective::BatchYield => "batch_yield",
            Objective::BatchTiter => "batch_titer",
            Objective::DupontMetric => "dupont_metric",
            Objective::LinearCombination => "linear_combination",
        }
    }

    /// Strict lookup
    pub fn from_name(name: &str) -> Option<Objective> {
        Self::ALL.into_iter().find(|objective| objective.name() == name)
    }

    /// Lookup with silent fallback to [`Objective::DEFAULT`]
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferment_rs::Objective;
    ///
    /// assert_eq!(Objective::resolve("batch_yield"), Objective::BatchYield);
    /// assert_eq!(Objective::resolve("no_such_metric"), Objective::BatchProductivity);
    /// ```
    pub fn resolve(name: &str) -> Objective {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::debug!(objective = name, fallback = Self::DEFAULT.name(), "unknown objective");
            Self::DEFAULT
        })
    }

    /// Function computing this metric
    pub fn metric_fn(&self) -> MetricFn {
        match self {
            Objective::BatchProductivity => metrics::batch_productivity,
            Objective::BatchYield => metrics::batch_yield,
            Objective::BatchTiter => metrics::batch_end_titer,
            Objective::DupontMetric => metrics::dupont_metric,
            Objective::LinearCombination => metrics::linear_combination,
        }
    }

    /// Evaluate this metric on a trajectory
    pub fn evaluate(&self, trajectory: &Trajectory, settings: &Settings) -> f64 {
        (self.metric_fn())(trajectory, settings)
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All five metrics of one trajectory
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FermentationMetrics {
    pub batch_productivity: f64,
    pub batch_yield: f64,
    pub batch_titer: f64,
    pub dupont_metric: f64,
    pub linear_combination: f64,
}

impl FermentationMetrics {
    /// Compute every metric
    pub fn compute(trajectory: &Trajectory, settings: &Settings) -> Self {
        Self {
            batch_productivity: metrics::batch_productivity(trajectory, settings),
            batch_yield: metrics::batch_yield(trajectory, settings),
            batch_titer: metrics::batch_end_titer(trajectory, settings),
            dupont_metric: metrics::dupont_metric(trajectory, settings),
            linear_combination: metrics::linear_combination(trajectory, settings),
        }
    }

    /// Report net losses of productivity, yield and titer as zero
    ///
    /// The composite scores are left as computed.
    pub fn clamp_losses(self) -> Self {
        Self {
            batch_productivity: self.batch_productivity.max(0.0),
            batch_yield: self.batch_yield.max(0.0),
            batch_titer: self.batch_titer.max(0.0),
            ..self
        }
    }

    /// Stored value of one metric
    pub fn get(&self, objective: Objective) -> f64 {
        match objective {
            Objective::BatchProductivity => self.batch_productivity,
            Objective::BatchYield => self.batch_yield,
            Objective::BatchTiter => self.batch_titer,
            Objective::DupontMetric => self.dupont_metric,
            Objective::LinearCombination => self.linear_combination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for objective in Objective::ALL {
            assert_eq!(Objective::from_name(objective.name()), Some(objective));
        }
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(Objective::from_name("titer"), None);
        assert_eq!(Objective::resolve("titer"), Objective::DEFAULT);
        assert_eq!(Objective::resolve(""), Objective::BatchProductivity);
    }

    #[test]
    fn test_titer_key_maps_to_end_titer() {
        assert_eq!(Objective::resolve("batch_titer"), Objective::BatchTiter);
    }

    #[test]
    fn test_clamp_losses_is_asymmetric() {
        let metrics = FermentationMetrics {
            batch_productivity: -1.0,
            batch_yield: -0.5,
            batch_titer: -0.1,
            dupont_metric: -2.0,
            linear_combination: -3.0,
        }
        .clamp_losses();

        assert_eq!(metrics.batch_productivity, 0.0);
        assert_eq!(metrics.batch_yield, 0.0);
        assert_eq!(metrics.batch_titer, 0.0);
        assert_eq!(metrics.dupont_metric, -2.0);
        assert_eq!(metrics.linear_combination, -3.0);
    }

    #[test]
    fn test_get_reads_matching_field() {
        let metrics = FermentationMetrics {
            batch_productivity: 1.0,
            batch_yield: 2.0,
            batch_titer: 3.0,
            dupont_metric: 4.0,
            linear_combination: 5.0,
        };

        let values: Vec<f64> = Objective::ALL.iter().map(|&o| metrics.get(o)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }
}
