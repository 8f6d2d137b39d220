//! Core library for showtrack - a thin client for the show tracking service.
//!
//! Provides the `AuthClient` for account registration and login against the
//! remote REST API, the `CredentialCache` for remembered login credentials,
//! and `Session` persistence for the bearer token a login returns.
//!
//! Presentation concerns (prompting, rendering, navigation) live in the
//! consuming binary, not here.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{AuthClient, AuthError};
pub use auth::{CredentialCache, KeyValueStore, KeyringStore, MemoryStore, Session, SessionData};
pub use config::Config;
pub use models::{Credentials, LoginSession, User};
