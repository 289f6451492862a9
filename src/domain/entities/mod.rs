//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`User`] - A registered account
//! - [`ShortLink`] - An alias-to-URL mapping with optional expiry
//!
//! Creation inputs follow the "New Type" pattern (`NewUser`, `NewShortLink`)
//! so that storage-assigned fields (id, timestamps) cannot be forged by
//! callers.

pub mod short_link;
pub mod user;

pub use short_link::{NewShortLink, ShortLink};
pub use user::{NewUser, User};
