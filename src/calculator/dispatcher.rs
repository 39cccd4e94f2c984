// src/calculator/dispatcher.rs
// Registry lookup + invocation + result formatting for one request

use super::errors::CalcError;
use super::formatter::{format_result, CalculationResult};
use super::registry::REGISTRY;

/// One calculation: an operator symbol plus one or two operands.
#[derive(Debug, Clone)]
pub struct CalculationRequest {
    pub operand1: f64,
    pub operator: String,
    pub operand2: Option<f64>,
}

/// Evaluate a unary operator applied to one operand.
pub fn evaluate_unary(symbol: &str, operand: f64) -> Result<CalculationResult, CalcError> {
    let op = REGISTRY
        .unary(symbol)
        .ok_or_else(|| CalcError::InvalidOperator(symbol.to_string()))?;
    let value = (op.apply)(operand)?;
    Ok(format_result(value))
}

/// Evaluate a binary operator applied to two operands.
pub fn evaluate_binary(symbol: &str, a: f64, b: f64) -> Result<CalculationResult, CalcError> {
    let op = REGISTRY
        .binary(symbol)
        .ok_or_else(|| CalcError::InvalidOperator(symbol.to_string()))?;
    let value = (op.apply)(a, b)?;
    Ok(format_result(value))
}

/// Dispatch one request. The unary table is consulted first, then the binary
/// table; a symbol found in neither is an InvalidOperator. Binary operators
/// require `operand2`.
pub fn calculate(request: &CalculationRequest) -> Result<CalculationResult, CalcError> {
    let symbol = request.operator.as_str();
    if REGISTRY.is_unary(symbol) {
        return evaluate_unary(symbol, request.operand1);
    }
    if REGISTRY.is_binary(symbol) {
        let operand2 = request
            .operand2
            .ok_or(CalcError::MissingOperand { expected: 3, got: 2 })?;
        return evaluate_binary(symbol, request.operand1, operand2);
    }
    Err(CalcError::InvalidOperator(symbol.to_string()))
}
