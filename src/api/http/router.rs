// src/api/http/router.rs
// HTTP router composition for REST API endpoints

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{calculate_handler, health_handler, operators_handler};

/// Calculator API router. Nested under /api by the server binary.
pub fn api_router() -> Router {
    Router::new()
        // Health
        .route("/health", get(health_handler))

        // Operator catalogue
        .route("/operators", get(operators_handler))

        // Calculation
        .route("/calculate", post(calculate_handler))
}
