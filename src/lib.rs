//! ferment-rs: Two-Stage Fermentation Simulation
//!
//! Simulates a batch fermentation as a growth stage followed by a production
//! stage, each driven by a flux vector from a metabolic network solve, and
//! searches for the switch time that maximises a fermentation metric.
//!
//! # Architecture
//!
//! ferment-rs keeps physics and numerics apart:
//!
//! - [`physics`] and [`models`] define the kinetics (what to solve): flux
//!   vectors, the concentration state and the exchange-flux kinetic law
//! - [`solver`] integrates a regime schedule (how to solve): RK4 or Euler,
//!   exact stage switching, substrate depletion as a terminal event
//! - [`timecourse`], [`optimizer`] and [`metrics`] build the two-stage
//!   timecourse, search the switch time and score trajectories
//! - [`fermentation`] ties it together in run objects and batch screening
//!
//! # Quick Start
//!
//! ```rust
//! use ferment_rs::physics::FluxVector;
//! use ferment_rs::{FermentationRun, OneStageFermentation, Settings, TwoStageFermentation};
//!
//! let settings = Settings {
//!     initial_biomass: 0.1,
//!     initial_substrate: 10.0,
//!     time_end: 10.0,
//!     num_timepoints: 50,
//!     ..Settings::default()
//! };
//!
//! // Growth without product, then production without growth
//! let growth = FluxVector::from([0.5, -1.0, 0.0]);
//! let production = FluxVector::from([0.0, -1.0, 0.8]);
//!
//! let two_stage = TwoStageFermentation::new(growth, production.clone(), &settings)?;
//! let one_stage = OneStageFermentation::new(production, &settings)?;
//!
//! println!("switch at {:.2} h", two_stage.optimal_switch_time());
//! assert!(two_stage.objective_value() > one_stage.objective_value());
//! # Ok::<(), ferment_rs::FermentationError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: screen candidates through rayon

pub mod config;
pub mod error;
pub mod fermentation;
pub mod metrics;
pub mod models;
pub mod optimizer;
pub mod physics;
pub mod solver;
pub mod timecourse;

pub use config::Settings;
pub use error::{FermentationError, Result};
pub use fermentation::{FermentationRun, OneStageFermentation, TwoStageFermentation};
pub use metrics::{FermentationMetrics, Objective};
pub use optimizer::SwitchTimeOptimization;
pub use timecourse::TimecourseIntegrator;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use ferment_rs::prelude::*;
    //! ```
    pub use crate::fermentation::{
        FermentationRun, OneStageFermentation, TwoStageFermentation, rank_by_objective,
        screen_one_stage, screen_two_stage,
    };
    pub use crate::metrics::{FermentationMetrics, Objective};
    pub use crate::physics::{ConcentrationState, FluxConvention, FluxVector};
    pub use crate::solver::{IntegrationMethod, Trajectory};
    pub use crate::{FermentationError, Settings, TimecourseIntegrator};
}
