// src/calculator/operations/advanced.rs
// Power, modulo, and square root

use super::{floored_mod, guard_finite};
use crate::calculator::errors::CalcError;

/// Raise base to the power of exponent.
///
/// A NaN result from finite inputs (fractional power of a negative base) is a
/// domain failure rather than a silent NaN.
pub fn power(base: f64, exponent: f64) -> Result<f64, CalcError> {
    let result = base.powf(exponent);
    if result.is_nan() && !base.is_nan() && !exponent.is_nan() {
        return Err(CalcError::Domain(
            "Fractional power of a negative base is undefined".to_string(),
        ));
    }
    guard_finite(result)
}

/// Remainder of dividend divided by divisor; the sign follows the divisor.
pub fn modulo(dividend: f64, divisor: f64) -> Result<f64, CalcError> {
    if divisor == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(floored_mod(dividend, divisor))
}

/// Principal square root. Fails with NegativeSqrt for negative input.
pub fn sqrt(value: f64) -> Result<f64, CalcError> {
    if value < 0.0 {
        return Err(CalcError::NegativeSqrt(value));
    }
    guard_finite(value.sqrt())
}
