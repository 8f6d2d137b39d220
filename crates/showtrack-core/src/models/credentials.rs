use serde::{Deserialize, Serialize};

/// Email and password pair for a single register or login call.
///
/// Constructed per call and never persisted except through
/// `CredentialCache`. Also serves as the JSON request body for the two
/// auth endpoints, which both take `{"email": ..., "password": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
