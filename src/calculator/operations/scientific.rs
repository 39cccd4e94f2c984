// src/calculator/operations/scientific.rs
// Trigonometric, logarithmic, and other scientific operations.
// Trig functions take and return degrees.

use super::{floored_mod, guard_finite};
use crate::calculator::errors::CalcError;

// Results this close to zero are floating-point noise from common angles
// (sin 180, cos 90) and snap to exactly zero.
const TRIG_EPSILON: f64 = 1e-15;

fn snap_zero(result: f64) -> f64 {
    if result.abs() < TRIG_EPSILON { 0.0 } else { result }
}

/// Sine of an angle in degrees.
pub fn sin(value: f64) -> Result<f64, CalcError> {
    Ok(snap_zero(value.to_radians().sin()))
}

/// Cosine of an angle in degrees.
pub fn cos(value: f64) -> Result<f64, CalcError> {
    Ok(snap_zero(value.to_radians().cos()))
}

/// Tangent of an angle in degrees; undefined at 90° + n·180°.
pub fn tan(value: f64) -> Result<f64, CalcError> {
    let normalized = floored_mod(value, 180.0);
    if (normalized - 90.0).abs() < 1e-10 {
        return Err(CalcError::Domain("Tangent is undefined at 90°".to_string()));
    }
    guard_finite(snap_zero(value.to_radians().tan()))
}

/// Arcsine in degrees; input must lie in [-1, 1].
pub fn asin(value: f64) -> Result<f64, CalcError> {
    if !(-1.0..=1.0).contains(&value) {
        return Err(CalcError::Domain(
            "asin requires value between -1 and 1".to_string(),
        ));
    }
    Ok(value.asin().to_degrees())
}

/// Arccosine in degrees; input must lie in [-1, 1].
pub fn acos(value: f64) -> Result<f64, CalcError> {
    if !(-1.0..=1.0).contains(&value) {
        return Err(CalcError::Domain(
            "acos requires value between -1 and 1".to_string(),
        ));
    }
    Ok(value.acos().to_degrees())
}

/// Arctangent in degrees.
pub fn atan(value: f64) -> Result<f64, CalcError> {
    Ok(value.atan().to_degrees())
}

/// Base-10 logarithm; input must be positive.
pub fn log10(value: f64) -> Result<f64, CalcError> {
    if value <= 0.0 {
        return Err(CalcError::Domain("Logarithm requires positive value".to_string()));
    }
    Ok(value.log10())
}

/// Natural logarithm; input must be positive.
pub fn ln(value: f64) -> Result<f64, CalcError> {
    if value <= 0.0 {
        return Err(CalcError::Domain("Logarithm requires positive value".to_string()));
    }
    Ok(value.ln())
}

/// e raised to the power of value.
pub fn exp(value: f64) -> Result<f64, CalcError> {
    guard_finite(value.exp())
}

/// Factorial of a non-negative integer. n > 170 overflows f64.
pub fn factorial(value: f64) -> Result<f64, CalcError> {
    if value < 0.0 {
        return Err(CalcError::InvalidInput(
            "Factorial requires non-negative integer".to_string(),
        ));
    }
    if value != value.trunc() {
        return Err(CalcError::InvalidInput("Factorial requires an integer".to_string()));
    }
    if value > 170.0 {
        return Err(CalcError::Overflow);
    }
    let n = value as u32;
    let mut result = 1.0_f64;
    for k in 2..=n {
        result *= f64::from(k);
    }
    Ok(result)
}

/// Reciprocal (1/x); fails for zero.
pub fn reciprocal(value: f64) -> Result<f64, CalcError> {
    if value == 0.0 {
        return Err(CalcError::InvalidInput("Cannot divide by zero".to_string()));
    }
    Ok(1.0 / value)
}

/// Square of a number.
pub fn square(value: f64) -> Result<f64, CalcError> {
    guard_finite(value * value)
}

/// Cube root; defined for negative input.
pub fn cbrt(value: f64) -> Result<f64, CalcError> {
    Ok(value.cbrt())
}

/// Absolute value.
pub fn absolute(value: f64) -> Result<f64, CalcError> {
    Ok(value.abs())
}

/// Sign change.
pub fn negate(value: f64) -> Result<f64, CalcError> {
    Ok(-value)
}
