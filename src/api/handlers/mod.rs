//! HTTP request handlers for API endpoints.

pub mod account;
pub mod health;
pub mod shorten;

pub use account::{login_handler, register_handler};
pub use health::health_handler;
pub use shorten::{delete_link_handler, resolve_handler, shorten_handler};
