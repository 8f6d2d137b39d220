use serde::{Deserialize, Serialize};

/// Result of a successful login: the opaque bearer token the service
/// expects on subsequent authenticated requests.
///
/// Owned by the caller once returned. No expiry is tracked here; the token
/// lives as long as the authenticated session does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSession {
    pub token: String,
}
