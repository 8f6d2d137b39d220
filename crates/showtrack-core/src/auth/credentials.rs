use anyhow::Result;
use tracing::debug;

use crate::models::Credentials;

use super::store::KeyValueStore;

/// Store key for the remembered email
const EMAIL_KEY: &str = "email";

/// Store key for the remembered password
const PASSWORD_KEY: &str = "password";

/// Remembered login credentials behind a pluggable key-value store.
///
/// The policy of WHEN to remember belongs to the caller: the "remember me"
/// choice is consulted once, after a successful login, so a failed login
/// never reaches this type and an existing pair is only replaced by a later
/// successful remember-me login.
pub struct CredentialCache<S> {
    store: S,
}

impl<S: KeyValueStore> CredentialCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist the pair, replacing any previous one (last write wins).
    /// Both keys go through a single store write.
    pub fn remember(&self, credentials: &Credentials) -> Result<()> {
        self.store.set_all(&[
            (EMAIL_KEY, credentials.email.as_str()),
            (PASSWORD_KEY, credentials.password.as_str()),
        ])
    }

    /// Return the remembered pair, if both halves are present and non-empty.
    ///
    /// An empty store is a normal state, not an error. Store read failures
    /// are logged and reported as absent.
    pub fn recall(&self) -> Option<Credentials> {
        let email = self.read(EMAIL_KEY)?;
        let password = self.read(PASSWORD_KEY)?;
        Some(Credentials { email, password })
    }

    /// Drop the remembered pair, if any.
    pub fn forget(&self) -> Result<()> {
        self.store.remove(EMAIL_KEY)?;
        self.store.remove(PASSWORD_KEY)?;
        Ok(())
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(Some(value)) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(e) => {
                debug!(key, error = %e, "Failed to read remembered credential");
                None
            }
        }
    }
}
