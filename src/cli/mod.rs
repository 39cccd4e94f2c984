// src/cli/mod.rs
// Argument classification and execution for the calc binary

use crate::calculator::{evaluate_binary, evaluate_unary, CalcError, REGISTRY};

pub const HELP_TEXT: &str = "\
Calculator - A command-line calculator

Usage:
  calc <operand1> <operator> <operand2>    Perform binary operation
  calc <operator> <operand>                Perform unary operation
  calc --help                              Show this help message

Binary Operators:
  +    Addition         (e.g., calc 5 + 3)
  -    Subtraction      (e.g., calc 10 - 4)
  *    Multiplication   (e.g., calc 6 * 7)
  /    Division         (e.g., calc 20 / 4)
  ^    Power            (e.g., calc 2 ^ 8)
  %    Modulo           (e.g., calc 17 % 5)

Unary Operators:
  sqrt Square root      (e.g., calc sqrt 16)
  sin/cos/tan           Trigonometry in degrees
  asin/acos/atan        Inverse trigonometry (degrees out)
  log/ln/exp            Logarithms and exponential
  fact/inv/sqr/cbrt     Factorial, reciprocal, square, cube root
  abs/neg               Absolute value, sign change

Notes:
  - Use quotes around * to prevent shell expansion: calc 6 \"*\" 7
  - For negative first operand, use: calc -- -5 + 3

Examples:
  calc 5 + 3          # Returns: 8
  calc 2 ^ 10         # Returns: 1024
  calc sqrt 144       # Returns: 12
";

pub const USAGE_TEXT: &str = "\
Usage: calc <operand1> <operator> <operand2>
       calc <operator> <operand>
       calc --help

Examples: calc 5 + 3, calc sqrt 16, calc 2 ^ 8
";

/// Parse an operand token as a finite double.
///
/// `f64::from_str` accepts `inf` and `NaN` spellings; those are not usable
/// operands, so they are rejected up front rather than left for the
/// operations to trip over.
pub fn parse_number(token: &str) -> Result<f64, CalcError> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CalcError::InvalidNumber(token.to_string()))
}

/// Classify the argument tokens by count and evaluate.
///
/// Two tokens are a unary call (`sqrt 16`), three a binary call (`5 + 3`);
/// anything else is a missing operand or an unknown operator, diagnosed to
/// match what the user was most likely attempting.
pub fn execute_calculation(args: &[String]) -> Result<String, CalcError> {
    match args {
        [] => Err(CalcError::MissingOperand { expected: 2, got: 0 }),

        [symbol, operand] if REGISTRY.is_unary(symbol) => {
            let operand = parse_number(operand)?;
            Ok(evaluate_unary(symbol, operand)?.display)
        }

        [left, symbol, right] => {
            // Both operands are validated before the operator, so a bad
            // number token is reported even alongside an unknown operator.
            let left = parse_number(left)?;
            let right = parse_number(right)?;
            if !REGISTRY.is_binary(symbol) {
                return Err(CalcError::InvalidOperator(symbol.clone()));
            }
            Ok(evaluate_binary(symbol, left, right)?.display)
        }

        [only] => {
            if REGISTRY.is_unary(only) {
                Err(CalcError::MissingOperand { expected: 2, got: 1 })
            } else {
                // Probably a binary attempt with everything else missing.
                Err(CalcError::MissingOperand { expected: 3, got: 1 })
            }
        }

        [first, second] => {
            if REGISTRY.is_binary(second) {
                Err(CalcError::MissingOperand { expected: 3, got: 2 })
            } else if !REGISTRY.is_unary(first) {
                Err(CalcError::InvalidOperator(first.clone()))
            } else {
                Err(CalcError::MissingOperand { expected: 2, got: 2 })
            }
        }

        _ => Err(CalcError::MissingOperand { expected: 3, got: args.len() }),
    }
}

/// Run one CLI invocation: print the result or the error, return the exit code.
pub fn run(args: &[String]) -> i32 {
    if args.is_empty() {
        print!("{USAGE_TEXT}");
        return 0;
    }
    match execute_calculation(args) {
        Ok(display) => {
            println!("{display}");
            0
        }
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code()
        }
    }
}
