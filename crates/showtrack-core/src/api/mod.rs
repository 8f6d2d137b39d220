//! REST API client module for the show tracking service.
//!
//! This module provides the `AuthClient` for the two account endpoints:
//! registration (`POST /api/users`) and login (`POST /api/users/sessions`).
//!
//! Every response wraps its payload in a `{"data": ...}` envelope; a
//! successful login yields the bearer token used to authorize the rest of
//! the API.

pub mod client;
pub mod error;

pub use client::AuthClient;
pub use error::AuthError;
