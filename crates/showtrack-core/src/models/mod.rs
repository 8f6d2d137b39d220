//! Data models for the show tracking service.
//!
//! - `Credentials`: email/password pair supplied per call
//! - `User`: account record returned by registration
//! - `LoginSession`: bearer token returned by login

pub mod credentials;
pub mod session;
pub mod user;

pub use credentials::Credentials;
pub use session::LoginSession;
pub use user::User;
