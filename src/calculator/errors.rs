// src/calculator/errors.rs
// Typed error taxonomy shared by the CLI and the HTTP API

/// Every way a calculation can fail.
///
/// Exit code 1 covers input-shape errors (bad token, unknown operator, wrong
/// argument count); exit code 2 covers calculation-domain errors (division by
/// zero, overflow, out-of-domain input).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid operator: {0}")]
    InvalidOperator(String),

    #[error("Missing operand: expected {expected} arguments, got {got}")]
    MissingOperand { expected: usize, got: usize },

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Result exceeds maximum representable value")]
    Overflow,

    #[error("Cannot compute square root of negative number: {0}")]
    NegativeSqrt(f64),

    #[error("{0}")]
    Domain(String),

    #[error("{0}")]
    InvalidInput(String),
}

impl CalcError {
    /// Process exit code for the CLI boundary.
    pub fn exit_code(&self) -> i32 {
        match self {
            CalcError::InvalidNumber(_)
            | CalcError::InvalidOperator(_)
            | CalcError::MissingOperand { .. } => 1,
            CalcError::DivisionByZero
            | CalcError::Overflow
            | CalcError::NegativeSqrt(_)
            | CalcError::Domain(_)
            | CalcError::InvalidInput(_) => 2,
        }
    }

    /// Machine-readable code for the HTTP API boundary.
    ///
    /// The mixed naming (underscored vs. not) matches the wire format clients
    /// already depend on.
    pub fn code(&self) -> &'static str {
        match self {
            CalcError::InvalidNumber(_) => "INVALIDNUMBER",
            CalcError::InvalidOperator(_) => "INVALID_OPERATOR",
            CalcError::MissingOperand { .. } => "MISSING_OPERAND",
            CalcError::DivisionByZero => "DIVISIONBYZERO",
            CalcError::Overflow => "OVERFLOW",
            CalcError::NegativeSqrt(_) => "NEGATIVESQRT",
            CalcError::Domain(_) => "DOMAIN",
            CalcError::InvalidInput(_) => "INVALIDINPUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_split_input_vs_calculation() {
        assert_eq!(CalcError::InvalidNumber("abc".into()).exit_code(), 1);
        assert_eq!(CalcError::InvalidOperator("@".into()).exit_code(), 1);
        assert_eq!(CalcError::MissingOperand { expected: 3, got: 2 }.exit_code(), 1);
        assert_eq!(CalcError::DivisionByZero.exit_code(), 2);
        assert_eq!(CalcError::Overflow.exit_code(), 2);
        assert_eq!(CalcError::NegativeSqrt(-4.0).exit_code(), 2);
        assert_eq!(CalcError::Domain("out of range".into()).exit_code(), 2);
        assert_eq!(CalcError::InvalidInput("bad".into()).exit_code(), 2);
    }

    #[test]
    fn test_messages_match_wire_format() {
        assert_eq!(
            CalcError::InvalidNumber("abc".into()).to_string(),
            "Invalid number: abc"
        );
        assert_eq!(
            CalcError::MissingOperand { expected: 3, got: 2 }.to_string(),
            "Missing operand: expected 3 arguments, got 2"
        );
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Division by zero is not allowed"
        );
        assert_eq!(
            CalcError::Overflow.to_string(),
            "Result exceeds maximum representable value"
        );
        assert_eq!(
            CalcError::NegativeSqrt(-4.0).to_string(),
            "Cannot compute square root of negative number: -4"
        );
    }

    #[test]
    fn test_api_codes() {
        assert_eq!(CalcError::DivisionByZero.code(), "DIVISIONBYZERO");
        assert_eq!(CalcError::InvalidOperator("@".into()).code(), "INVALID_OPERATOR");
        assert_eq!(
            CalcError::MissingOperand { expected: 3, got: 2 }.code(),
            "MISSING_OPERAND"
        );
        assert_eq!(CalcError::NegativeSqrt(-1.0).code(), "NEGATIVESQRT");
    }
}
