// src/api/http/mod.rs
// REST API surface for the calculator

pub mod error;
pub mod handlers;
pub mod router;
pub mod types;

pub use router::api_router;
