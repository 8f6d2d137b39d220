//! API client for the show tracking service's account endpoints.
//!
//! This module provides the `AuthClient` struct for registering an account
//! and exchanging credentials for a session token.

use std::time::Duration;

use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;

use crate::models::{Credentials, LoginSession, User};

use super::AuthError;

// ============================================================================
// Constants
// ============================================================================

/// Base URL for the production API
const DEFAULT_BASE_URL: &str = "https://api.infinum.academy";

/// Path for account registration
const REGISTER_PATH: &str = "/api/users";

/// Path for exchanging credentials for a session token
const LOGIN_PATH: &str = "/api/users/sessions";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Wire envelope: every response carries its payload under a `data` key.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Client for the register and login endpoints.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// Create a client against the production API
    pub fn new() -> Result<Self, AuthError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against another base URL (staging, mock server)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a new account.
    ///
    /// Succeeds only if the service answers 2xx with a user record in the
    /// response envelope.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.post_envelope(REGISTER_PATH, email, password).await
    }

    /// Exchange credentials for a session token.
    ///
    /// No local state is touched: on failure the caller gets an `AuthError`
    /// and nothing else, so the call can simply be issued again.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession, AuthError> {
        self.post_envelope(LOGIN_PATH, email, password).await
    }

    /// POST the credential body to `path` and decode the enveloped payload.
    async fn post_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<T, AuthError> {
        let url = format!("{}{}", self.base_url, path);
        let body = Credentials::new(email, password);

        debug!(url = %url, email = %email, "Sending auth request");

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(url = %url, status = %status, "Auth request rejected");
            return Err(AuthError::from_status(status, &body));
        }

        let text = response.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&text)
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AuthClient {
        AuthClient::with_base_url(server.uri()).expect("build client")
    }

    #[tokio::test]
    async fn test_register_decodes_enveloped_user() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users"))
            .and(body_json(json!({
                "email": "a@b.com",
                "password": "secret"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": {
                    "id": "42",
                    "email": "a@b.com",
                    "type": "users"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = client_for(&server)
            .register("a@b.com", "secret")
            .await
            .expect("register should succeed");

        assert_eq!(user.id, "42");
        assert_eq!(user.email, "a@b.com");
    }

    #[tokio::test]
    async fn test_login_decodes_enveloped_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users/sessions"))
            .and(body_json(json!({
                "email": "a@b.com",
                "password": "secret"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "token": "abc123" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = client_for(&server)
            .login("a@b.com", "secret")
            .await
            .expect("login should succeed");

        assert_eq!(session.token, "abc123");
    }

    #[tokio::test]
    async fn test_login_rejection_maps_to_invalid_credentials() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users/sessions"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .login("x@y.com", "bad")
            .await
            .expect_err("login should fail");

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_register_validation_failure_maps_to_invalid_credentials() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "errors": ["Email can't be blank"]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .register("", "secret")
            .await
            .expect_err("register should fail");

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_missing_data_key_is_invalid_response() {
        let server = MockServer::start().await;

        // 2xx but no envelope around the payload
        Mock::given(method("POST"))
            .and(path("/api/users/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "abc123"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .login("a@b.com", "secret")
            .await
            .expect_err("login should fail");

        assert!(matches!(err, AuthError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_server_error_keeps_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(500).set_body_string("out of disk"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .register("a@b.com", "secret")
            .await
            .expect_err("register should fail");

        match err {
            AuthError::Status { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "out of disk");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
