//! Newton's law of universal gravitation

/// Gravitational constant in N·m²/kg²
pub const G: f64 = 6.674e-11;

/// Magnitude of the gravitational force between two masses `r` metres apart
///
/// Returns 0 for a zero separation instead of infinity.
#[inline]
pub fn gravitational_force(m1: f64, m2: f64, r: f64) -> f64 {
    inverse_square(G, m1, m2, r * r)
}

/// `g · m1 · m2 / r2` for a squared separation `r2`, 0 when `r2` is not positive
#[inline]
pub fn inverse_square(g: f64, m1: f64, m2: f64, r2: f64) -> f64 {
    if r2 > 0.0 {
        g * m1 * m2 / r2
    } else {
        0.0
    }
}
