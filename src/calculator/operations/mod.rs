// src/calculator/operations/mod.rs
// Pure math operations; every function converts non-finite results into
// typed failures before returning

pub mod advanced;
pub mod basic;
pub mod scientific;

use crate::calculator::errors::CalcError;

/// Binary operation over two operands.
pub type BinaryFn = fn(f64, f64) -> Result<f64, CalcError>;

/// Unary operation over one operand.
pub type UnaryFn = fn(f64) -> Result<f64, CalcError>;

/// Reject non-finite results. NaN counts too: `inf - inf` must surface as a
/// typed failure, never leak through to the formatter.
pub(crate) fn guard_finite(result: f64) -> Result<f64, CalcError> {
    if !result.is_finite() {
        return Err(CalcError::Overflow);
    }
    Ok(result)
}

/// Floored modulo: the result takes the sign of the divisor.
///
/// Rust's `%` truncates toward zero, which gives the dividend's sign instead.
pub(crate) fn floored_mod(dividend: f64, divisor: f64) -> f64 {
    let remainder = dividend % divisor;
    if remainder != 0.0 && (remainder < 0.0) != (divisor < 0.0) {
        remainder + divisor
    } else {
        remainder
    }
}
