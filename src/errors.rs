//! Typed error hierarchy for the PizzaCraft client.
//!
//! Three top-level enums cover the three subsystems:
//! - `ApiError` — collaborator HTTP failures (catalog, auth, payment, order)
//! - `StoreError` — local persistence failures (cart file, session file)
//! - `CheckoutError` — checkout infrastructure failures (widget, callback server)

use thiserror::Error;

/// Errors from the collaborator HTTP clients.
///
/// `Rejected` carries the backend's `message` field, which is surfaced to the
/// user verbatim. Transport and decode failures are surfaced with a generic
/// message chosen at the call site.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Rejected {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response from {endpoint}: {source}")]
    MalformedResponse {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// The message to show the user: the backend's own message for a
    /// rejection, otherwise the caller-supplied fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Errors from local persistence (cart and session files).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {what}: {source}")]
    SerializeFailed {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from the checkout flow's own infrastructure.
///
/// Collaborator rejections are not errors at this level — the orchestrator
/// converts them into outcomes and returns to `Idle`. These variants cover
/// the cases where the flow itself cannot run.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Failed to start payment callback server: {0}")]
    CallbackBind(#[source] std::io::Error),

    #[error("Failed to open the hosted payment page: {0}")]
    WidgetLaunch(#[source] std::io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
