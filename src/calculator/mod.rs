// src/calculator/mod.rs
// Evaluation core: registry, operations, dispatch, and result formatting

pub mod dispatcher;
pub mod errors;
pub mod formatter;
pub mod operations;
pub mod registry;

pub use dispatcher::{calculate, evaluate_binary, evaluate_unary, CalculationRequest};
pub use errors::CalcError;
pub use formatter::{format_result, format_value, CalculationResult};
pub use registry::{build_registry, OperatorRegistry, REGISTRY};
