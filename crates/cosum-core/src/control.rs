//! Closed-form control value `y(x) = −ln(2·sin(x/2))`.

/// Control value the series converges to.
///
/// Defined only where `2·sin(x/2) > 0`; elsewhere the result is NaN and
/// callers must check for it before using the value.
///
/// # Example
/// ```
/// use cosum_core::control::control_value;
///
/// let y = control_value(std::f64::consts::PI);
/// assert!((y + std::f64::consts::LN_2).abs() < 1e-12);
/// assert!(control_value(0.0).is_nan());
/// ```
#[must_use]
pub fn control_value(x: f64) -> f64 {
    let arg = 2.0 * (x / 2.0).sin();
    if arg > 0.0 {
        -arg.ln()
    } else {
        f64::NAN
    }
}
