//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by coordinating repository calls,
//! validation, and business rules, and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::account_service::AccountService`] - Registration and login
//! - [`services::link_service::LinkService`] - Short link lifecycle

pub mod services;
