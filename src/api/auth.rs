//! Auth collaborator: login, registration, and account recovery.
//!
//! Identity is owned entirely by the backend. The client's only job is to
//! exchange credentials for a profile plus an opaque bearer token, and to
//! relay recovery/verification requests.

use serde::Deserialize;
use serde_json::json;

use super::ApiClient;
use crate::errors::ApiError;
use crate::session::Session;

/// Responses that only carry a human-readable message.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Client for the `/auth` endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchange credentials for a session.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        self.api
            .post_json(
                "/auth/login",
                &json!({ "email": email, "password": password }),
                None,
            )
            .await
    }

    /// Create an account. The backend sends a verification email and returns
    /// a session for the new user.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, ApiError> {
        self.api
            .post_json(
                "/auth/register",
                &json!({ "name": name, "email": email, "password": password }),
                None,
            )
            .await
    }

    /// Ask the backend to send a password reset link.
    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.api
            .post_json("/auth/forgot-password", &json!({ "email": email }), None)
            .await
    }

    /// Redeem an email verification token.
    pub async fn verify_email(&self, token: &str) -> Result<MessageResponse, ApiError> {
        self.api
            .get_json(&format!("/auth/verify-email/{}", token), &[], None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shape() {
        let json = r#"{
            "user": { "name": "Priya", "email": "priya@example.com" },
            "token": "eyJhbGciOi.opaque.token"
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.user.name, "Priya");
        assert_eq!(session.user.email, "priya@example.com");
        assert_eq!(session.token, "eyJhbGciOi.opaque.token");
    }

    #[test]
    fn test_message_response_shape() {
        let resp: MessageResponse =
            serde_json::from_str(r#"{"message":"Email verified successfully"}"#).unwrap();
        assert_eq!(resp.message, "Email verified successfully");
    }
}
