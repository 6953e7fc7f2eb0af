//! Helper functions for integration tests

use ferment_rs::physics::ConcentrationState;

/// Assert two scalars agree within an absolute tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, message: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: {} vs {} differs by {} (tolerance {})",
        message, actual, expected, diff, tolerance
    );
}

/// Assert that two concentration states are close (within tolerance)
pub fn assert_states_close(
    state1: &ConcentrationState,
    state2: &ConcentrationState,
    tolerance: f64,
    message: &str,
) {
    for (i, (v1, v2)) in state1.to_array().into_iter().zip(state2.to_array()).enumerate() {
        let diff = (v1 - v2).abs();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// Compute relative error, guarding against division by zero
pub fn relative_error(computed: f64, exact: f64) -> f64 {
    if exact.abs() < 1e-14 {
        computed.abs()
    } else {
        ((computed - exact) / exact).abs()
    }
}
