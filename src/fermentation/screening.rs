//! Batch screening of candidate flux strategies
//!
//! Every candidate is an independent run. With the `parallel` feature the
//! candidates are mapped through rayon; results keep the input order either
//! way, one `Result` per candidate, so a single failing candidate does not
//! abort the screen.

use crate::config::Settings;
use crate::error::Result;
use crate::fermentation::{FermentationRun, OneStageFermentation, TwoStageFermentation};
use crate::physics::FluxVector;
use tracing::debug;

/// Run a [`TwoStageFermentation`] for each (stage one, stage two) pair
pub fn screen_two_stage(
    candidates: &[(FluxVector, FluxVector)],
    settings: &Settings,
) -> Vec<Result<TwoStageFermentation>> {
    let run = |(stage_one, stage_two): &(FluxVector, FluxVector)| {
        TwoStageFermentation::new(stage_one.clone(), stage_two.clone(), settings)
    };

    #[cfg(feature = "parallel")]
    let results = {
        use rayon::prelude::*;
        candidates.par_iter().map(run).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let results = candidates.iter().map(run).collect();

    results
}

/// Run a [`OneStageFermentation`] for each flux vector
pub fn screen_one_stage(
    candidates: &[FluxVector],
    settings: &Settings,
) -> Vec<Result<OneStageFermentation>> {
    let run = |fluxes: &FluxVector| OneStageFermentation::new(fluxes.clone(), settings);

    #[cfg(feature = "parallel")]
    let results = {
        use rayon::prelude::*;
        candidates.par_iter().map(run).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let results = candidates.iter().map(run).collect();

    results
}

/// Successful runs, best `objective_value` first
///
/// Failed candidates are dropped. Ties keep their input order.
pub fn rank_by_objective<R, I>(results: I) -> Vec<R>
where
    R: FermentationRun,
    I: IntoIterator<Item = Result<R>>,
{
    let mut ranked: Vec<R> = results
        .into_iter()
        .enumerate()
        .filter_map(|(index, result)| match result {
            Ok(run) => Some(run),
            Err(err) => {
                debug!(candidate = index, error = %err, "candidate dropped from ranking");
                None
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.objective_value().total_cmp(&a.objective_value()));
    ranked
}
