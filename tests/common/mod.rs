//! Common utilities for integration tests

#![allow(dead_code)]

pub mod fixtures;
pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use fixtures::{batch_settings, growth_fluxes, production_fluxes};
pub use mock_models::{ExponentialGrowth, LinearUptake};
pub use test_helpers::{assert_close, assert_states_close, relative_error};
