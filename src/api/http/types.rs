// src/api/http/types.rs
// Request/response payloads for the REST API

use serde::{Deserialize, Serialize};

/// Body of `POST /api/calculate`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateRequest {
    pub operand1: f64,
    pub operator: String,
    /// Required for binary operators, ignored for unary ones.
    #[serde(default)]
    pub operand2: Option<f64>,
}

/// Successful calculation response.
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub success: bool,
    pub result: f64,
    pub display: String,
}

/// One entry of `GET /api/operators`.
#[derive(Debug, Serialize)]
pub struct OperatorInfo {
    pub symbol: &'static str,
    #[serde(rename = "type")]
    pub arity: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OperatorsResponse {
    pub operators: Vec<OperatorInfo>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
