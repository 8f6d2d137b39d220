use serde::{Deserialize, Serialize};

/// Registered account as returned by `POST /api/users`.
///
/// Immutable once decoded. The wire record carries more fields than these;
/// only the identifier and email are part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}
