//! Shared batch settings and flux strategies

use ferment_rs::Settings;
use ferment_rs::physics::FluxVector;

/// Small batch: 0.1 gDW/L biomass on 10 mmol/L substrate for 10 h
pub fn batch_settings() -> Settings {
    Settings {
        initial_biomass: 0.1,
        initial_substrate: 10.0,
        initial_product: 0.0,
        time_end: 10.0,
        num_timepoints: 50,
        ..Settings::default()
    }
}

/// Growth-coupled stage: grows, consumes, makes nothing
pub fn growth_fluxes() -> FluxVector {
    FluxVector::from([0.5, -1.0, 0.0])
}

/// Production stage: no growth, converts substrate to product
pub fn production_fluxes() -> FluxVector {
    FluxVector::from([0.0, -1.0, 0.8])
}
