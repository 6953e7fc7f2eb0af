//! Run settings
//!
//! `Settings` is handed over by whatever front end loads configuration. It
//! derives serde with `#[serde(default)]`, so a partial document is filled
//! in from [`Settings::default`].
//!
//! ```rust
//! use ferment_rs::Settings;
//!
//! let settings = Settings {
//!     initial_substrate: 10.0,
//!     time_end: 10.0,
//!     num_timepoints: 50,
//!     ..Settings::default()
//! };
//! assert!(settings.validate().is_ok());
//! ```

use crate::error::{FermentationError, Result};
use crate::physics::{ConcentrationState, FluxConvention};
use crate::solver::IntegrationMethod;
use serde::{Deserialize, Serialize};

/// Read-only configuration of a fermentation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial biomass concentration \[gDW/L\]
    pub initial_biomass: f64,
    /// Initial substrate concentration \[mmol/L\]
    pub initial_substrate: f64,
    /// Initial product concentration \[mmol/L\]
    pub initial_product: f64,

    /// Batch horizon \[h\]
    pub time_end: f64,
    /// Output samples over `[0, time_end]`
    pub num_timepoints: usize,

    /// Name of the metric to optimise and report; unknown names fall back
    /// to batch productivity
    pub objective: String,

    /// Weight of productivity in the linear combination
    pub productivity_coefficient: f64,
    /// Weight of yield in the linear combination
    pub yield_coefficient: f64,
    /// Weight of titer in the linear combination
    pub titer_coefficient: f64,

    /// Flux index roles
    pub flux_convention: FluxConvention,

    /// Time-stepping method
    pub integration_method: IntegrationMethod,
    /// Integration steps between consecutive samples
    pub integration_substeps: usize,

    /// Iteration cap of the switch-time search
    pub optimizer_max_iterations: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_biomass: 0.05,
            initial_substrate: 500.0,
            initial_product: 0.0,
            time_end: 12.0,
            num_timepoints: 1000,
            objective: "batch_productivity".to_string(),
            productivity_coefficient: 1.0,
            yield_coefficient: 1.0,
            titer_coefficient: 1.0,
            flux_convention: FluxConvention::default(),
            integration_method: IntegrationMethod::default(),
            integration_substeps: 20,
            optimizer_max_iterations: 100,
        }
    }
}

impl Settings {
    /// Initial (biomass, substrate, product)
    pub fn initial_state(&self) -> ConcentrationState {
        ConcentrationState::new(
            self.initial_biomass,
            self.initial_substrate,
            self.initial_product,
        )
    }

    /// Reject settings with no sensible numerical fallback
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("initial_biomass", self.initial_biomass),
            ("initial_substrate", self.initial_substrate),
            ("initial_product", self.initial_product),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }

        if !self.time_end.is_finite() || self.time_end <= 0.0 {
            return Err(invalid(format!(
                "time_end must be finite and positive, got {}",
                self.time_end
            )));
        }
        if self.num_timepoints < 2 {
            return Err(invalid(format!(
                "num_timepoints must be at least 2, got {}",
                self.num_timepoints
            )));
        }
        if self.integration_substeps == 0 {
            return Err(invalid("integration_substeps must be at least 1".to_string()));
        }
        if self.optimizer_max_iterations == 0 {
            return Err(invalid("optimizer_max_iterations must be at least 1".to_string()));
        }

        for (name, value) in [
            ("productivity_coefficient", self.productivity_coefficient),
            ("yield_coefficient", self.yield_coefficient),
            ("titer_coefficient", self.titer_coefficient),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("{} must be finite, got {}", name, value)));
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> FermentationError {
    FermentationError::InvalidConfiguration(message)
}
