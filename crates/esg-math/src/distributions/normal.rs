//! Standard normal distribution.

use esg_core::Real;
use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::SQRT_2;

/// The standard normal cumulative distribution function Φ(x).
///
/// Evaluated through the complementary error function,
/// `Φ(x) = erfc(−x/√2) / 2`, which keeps full relative accuracy in the
/// lower tail.
pub fn normal_cdf(x: Real) -> Real {
    0.5 * erfc(-x / SQRT_2)
}

/// The inverse standard normal CDF (probit), `Φ⁻¹(p) = −√2 · erfc⁻¹(2p)`.
///
/// Returns `−∞` at `p = 0`, `+∞` at `p = 1` and NaN outside `[0, 1]`.
pub fn normal_cdf_inverse(p: Real) -> Real {
    match p {
        p if p == 0.0 => Real::NEG_INFINITY,
        p if p == 1.0 => Real::INFINITY,
        p if p > 0.0 && p < 1.0 => -SQRT_2 * erfc_inv(2.0 * p),
        _ => Real::NAN,
    }
}
