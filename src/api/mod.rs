//! HTTP clients for the backend collaborators.
//!
//! Every collaborator speaks JSON over HTTP. Authenticated requests carry the
//! session's opaque bearer token as `Authorization: Bearer <token>`; the
//! client never inspects the token. Error bodies carry a `message` field
//! which is surfaced to the user verbatim.

pub mod auth;
pub mod catalog;
pub mod orders;
pub mod payment;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

/// Error body shape shared by all collaborators.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Shared request plumbing for the collaborator clients.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut req = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query);
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        let resp = req.send().await?;
        decode(path, resp).await
    }

    pub(crate) async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut req = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body);
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        let resp = req.send().await?;
        decode(path, resp).await
    }
}

/// Decode a collaborator response: non-success statuses become
/// `ApiError::Rejected` with the backend's own message when one is present.
async fn decode<T: DeserializeOwned>(
    endpoint: &str,
    resp: reqwest::Response,
) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        return Err(ApiError::Rejected { status, message });
    }
    resp.json::<T>()
        .await
        .map_err(|source| ApiError::MalformedResponse {
            endpoint: endpoint.to_string(),
            source,
        })
}
