// src/calculator/operations/basic.rs
// The four fundamental arithmetic operations

use super::guard_finite;
use crate::calculator::errors::CalcError;

/// Add two numbers.
pub fn add(a: f64, b: f64) -> Result<f64, CalcError> {
    guard_finite(a + b)
}

/// Subtract b from a.
pub fn subtract(a: f64, b: f64) -> Result<f64, CalcError> {
    guard_finite(a - b)
}

/// Multiply two numbers.
pub fn multiply(a: f64, b: f64) -> Result<f64, CalcError> {
    guard_finite(a * b)
}

/// Divide a by b. Fails with DivisionByZero when b is exactly zero.
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    guard_finite(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(5.0, 3.0), Ok(8.0));
        assert_eq!(add(-2.5, 7.5), Ok(5.0));
    }

    #[test]
    fn test_add_overflow() {
        assert_eq!(add(f64::MAX, f64::MAX), Err(CalcError::Overflow));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(10.0, 4.0), Ok(6.0));
        assert_eq!(subtract(3.0, 5.0), Ok(-2.0));
    }

    #[test]
    fn test_subtract_overflow() {
        assert_eq!(subtract(-f64::MAX, f64::MAX), Err(CalcError::Overflow));
    }

    #[test]
    fn test_non_finite_operands_never_yield_nan() {
        assert_eq!(subtract(f64::INFINITY, f64::INFINITY), Err(CalcError::Overflow));
        assert_eq!(add(f64::INFINITY, f64::NEG_INFINITY), Err(CalcError::Overflow));
        assert_eq!(multiply(f64::INFINITY, 0.0), Err(CalcError::Overflow));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(6.0, 7.0), Ok(42.0));
        assert_eq!(multiply(2.5, 4.0), Ok(10.0));
    }

    #[test]
    fn test_multiply_overflow() {
        assert_eq!(multiply(1e308, 1e10), Err(CalcError::Overflow));
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(20.0, 4.0), Ok(5.0));
        assert_eq!(divide(10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(10.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(divide(0.0, 0.0), Err(CalcError::DivisionByZero));
        // Negative zero compares equal to zero.
        assert_eq!(divide(1.0, -0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_divide_overflow() {
        assert_eq!(divide(1e308, 1e-10), Err(CalcError::Overflow));
    }
}
