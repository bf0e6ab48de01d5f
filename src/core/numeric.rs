//! Decimal rounding shared by aggregation and projection
//!
//! Every multiplication and division in the engine is settled to a fixed number
//! of decimal places immediately after it is computed. Binary floating-point
//! residue (e.g. `0.1 * 3.0` landing on `0.30000000000000004`) then never
//! accumulates across terms or leaks into displayed averages.

/// Number of decimal places every intermediate value is rounded to.
pub const PRECISION_DECIMALS: i32 = 4;

const PRECISION_FACTOR: f64 = 10_000.0;

/// Round a value to [`PRECISION_DECIMALS`] decimal places.
///
/// Halves round away from zero. Non-finite input is returned unchanged.
#[must_use]
pub fn round4(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let rounded = (value * PRECISION_FACTOR).round() / PRECISION_FACTOR;
    // Normalize -0.0 so equal results compare and print identically.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Multiply two values and round the product.
#[must_use]
pub fn mul4(a: f64, b: f64) -> f64 {
    round4(a * b)
}

/// Divide two values and round the quotient.
///
/// Callers guarantee `denominator != 0`; the engine validates credit bases before dividing.
#[must_use]
pub fn div4(numerator: f64, denominator: f64) -> f64 {
    round4(numerator / denominator)
}

/// Returns true when two rounded values agree to within half a unit of the last decimal.
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.5 / PRECISION_FACTOR
}
