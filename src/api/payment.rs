//! Payment collaborator: intent creation and verification.
//!
//! The gateway itself is a black box. The backend creates a payment intent
//! for the cart total, the hosted widget collects the actual payment, and
//! the backend verifies the widget's signed confirmation. The client only
//! shuttles opaque identifiers between the two.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::ApiClient;
use crate::errors::ApiError;

/// A payment intent: an amount reserved for authorization with the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub amount: u32,
    pub currency: String,
}

/// The hosted widget's signed completion payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// Result of backend-side verification of a confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedPayment {
    pub payment_id: String,
}

/// The payment collaborator as the checkout orchestrator consumes it.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Reserve `amount` for authorization. Returns the intent the hosted
    /// widget must be opened with.
    async fn create_intent(&self, amount: u32, token: &str) -> Result<PaymentIntent, ApiError>;

    /// Verify a signed confirmation from the widget.
    async fn verify(
        &self,
        confirmation: &PaymentConfirmation,
        token: &str,
    ) -> Result<VerifiedPayment, ApiError>;
}

/// HTTP implementation backed by the `/payments` endpoints.
#[derive(Debug, Clone)]
pub struct HttpPaymentGateway {
    api: ApiClient,
}

impl HttpPaymentGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn create_intent(&self, amount: u32, token: &str) -> Result<PaymentIntent, ApiError> {
        self.api
            .post_json(
                "/payments/create-order",
                &json!({ "amount": amount }),
                Some(token),
            )
            .await
    }

    async fn verify(
        &self,
        confirmation: &PaymentConfirmation,
        token: &str,
    ) -> Result<VerifiedPayment, ApiError> {
        self.api
            .post_json("/payments/verify", confirmation, Some(token))
            .await
    }
}
