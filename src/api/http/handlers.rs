// src/api/http/handlers.rs
// Handlers for health, operator listing, and calculation

use axum::{response::IntoResponse, Json};
use tracing::info;

use crate::calculator::{calculate, CalculationRequest, REGISTRY};

use super::error::ApiResult;
use super::types::{
    CalculateRequest, CalculateResponse, HealthResponse, OperatorInfo, OperatorsResponse,
};

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// List every registered operator with its arity and description
pub async fn operators_handler() -> impl IntoResponse {
    let mut operators: Vec<OperatorInfo> = REGISTRY
        .binary_operators()
        .map(|op| OperatorInfo {
            symbol: op.symbol,
            arity: "binary",
            description: op.description,
        })
        .chain(REGISTRY.unary_operators().map(|op| OperatorInfo {
            symbol: op.symbol,
            arity: "unary",
            description: op.description,
        }))
        .collect();
    // HashMap iteration order is unstable; sort so the listing is reproducible.
    operators.sort_by_key(|op| op.symbol);
    Json(OperatorsResponse { operators })
}

/// Perform one calculation
pub async fn calculate_handler(
    Json(request): Json<CalculateRequest>,
) -> ApiResult<Json<CalculateResponse>> {
    let result = calculate(&CalculationRequest {
        operand1: request.operand1,
        operator: request.operator.clone(),
        operand2: request.operand2,
    })?;

    info!(
        operator = %request.operator,
        display = %result.display,
        "calculation completed"
    );

    Ok(Json(CalculateResponse {
        success: true,
        result: result.value,
        display: result.display,
    }))
}
