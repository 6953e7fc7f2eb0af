//! Kinetic models for fermentation simulation
//!
//! All models implement the [`KineticModel`](crate::physics::KineticModel) trait.
//! The solver calls `compute_physics` at each stage of each step; models are
//! responsible for the kinetics, the solver for the time integration.
//!
//! # Available Models
//!
//! ## [`ExchangeKinetics`]
//!
//! Biomass-proportional growth, substrate uptake and product secretion
//! taken from a flux-balance solution, gated off once substrate runs out.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod exchange;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use exchange::ExchangeKinetics;
