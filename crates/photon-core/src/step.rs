//! Heaviside step function.

/// `Θ(x)`: 0 for `x < 0`, 1 for `x > 0`, 0.5 at the origin.
///
/// NaN compares false both ways and lands on 0.5.
pub fn heaviside(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 0.0 {
        1.0
    } else {
        0.5
    }
}
