//! Physical description of a batch fermentation
//!
//! # Core Concepts
//!
//! - **Concentration State**: biomass, substrate and product at one instant
//! - **Flux Vector**: rates from a flux-balance solve, read through a
//!   [`FluxConvention`]
//! - **Kinetic Model**: turns a state into its time derivative
//!
//! # Architecture
//!
//! Kinetic models are **separate from numerical solvers**:
//! - The model provides the **equations**
//! - The solver provides the **method** to integrate them
//!
//! # Implementing a New Kinetic Model
//!
//! ```rust
//! use ferment_rs::physics::{ConcentrationState, KineticModel};
//!
//! /// Biomass decays, nothing else happens
//! struct Decay {
//!     rate: f64,
//! }
//!
//! impl KineticModel for Decay {
//!     fn compute_physics(&self, state: &ConcentrationState) -> ConcentrationState {
//!         ConcentrationState::new(-self.rate * state.biomass(), 0.0, 0.0)
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Decay"
//!     }
//! }
//! ```

pub mod flux;
pub mod state;
pub mod traits;

pub use flux::{ExchangeRates, FluxConvention, FluxVector};
pub use state::ConcentrationState;
pub use traits::KineticModel;
