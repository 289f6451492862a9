//! REST API layer for HTTP request/response handling.
//!
//! Pure orchestration: translates HTTP requests into service calls and maps
//! each [`crate::error::AppError`] kind to a user-facing outcome. No business
//! rules live here.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
