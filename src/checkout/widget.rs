//! Hosted payment widget integration.
//!
//! The gateway's payment page runs outside this process. `HostedPaymentWidget`
//! opens it in the system browser and stands up a localhost callback server
//! for the page to report back to:
//!
//! - `POST /callback` — the signed confirmation when the user completes payment
//! - `GET /cancel` — the user backed out
//!
//! The server binds a dynamic port on localhost, correlates the callback with
//! a per-attempt nonce, and resolves exactly once. If neither endpoint is hit
//! within the configured timeout the attempt resolves to `Cancelled`, so the
//! orchestrator can never be parked in `AwaitingUserPayment` forever.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::payment::{PaymentConfirmation, PaymentIntent};
use crate::errors::CheckoutError;

/// Customer details the widget is pre-filled with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPrefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// How a widget attempt resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetOutcome {
    /// The user paid; the page posted back its signed confirmation.
    Completed(PaymentConfirmation),
    /// The user closed the page, hit cancel, or the callback timed out.
    Cancelled,
}

/// The hosted widget as the checkout orchestrator consumes it.
#[async_trait]
pub trait PaymentWidget: Send + Sync {
    /// Open the widget for `intent` and suspend until it resolves.
    async fn collect(
        &self,
        intent: &PaymentIntent,
        prefill: &PaymentPrefill,
    ) -> Result<WidgetOutcome, CheckoutError>;
}

/// Browser-based widget implementation.
pub struct HostedPaymentWidget {
    widget_url: String,
    key_id: String,
    timeout: Duration,
}

/// Shared state for the callback handlers. The sender is taken on first
/// resolution; later hits find it gone and are ignored.
#[derive(Clone)]
struct CallbackState {
    nonce: String,
    outcome_tx: Arc<Mutex<Option<oneshot::Sender<WidgetOutcome>>>>,
}

impl CallbackState {
    fn resolve(&self, outcome: WidgetOutcome) -> bool {
        let Ok(mut guard) = self.outcome_tx.lock() else {
            return false;
        };
        match guard.take() {
            Some(tx) => tx.send(outcome).is_ok(),
            None => false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CallbackQuery {
    nonce: String,
}

impl HostedPaymentWidget {
    pub fn new(widget_url: impl Into<String>, key_id: impl Into<String>, timeout: Duration) -> Self {
        Self {
            widget_url: widget_url.into(),
            key_id: key_id.into(),
            timeout,
        }
    }

    /// Build the hosted page URL with intent, prefill, and callback wiring.
    fn build_checkout_url(
        &self,
        intent: &PaymentIntent,
        prefill: &PaymentPrefill,
        callback_base: &str,
        nonce: &str,
    ) -> Result<reqwest::Url, CheckoutError> {
        let amount = intent.amount.to_string();
        let params = [
            ("key", self.key_id.as_str()),
            ("order_id", intent.id.as_str()),
            ("amount", amount.as_str()),
            ("currency", intent.currency.as_str()),
            ("name", "PizzaCraft"),
            ("description", "Payment for your custom pizza order"),
            ("prefill[name]", prefill.name.as_str()),
            ("prefill[email]", prefill.email.as_str()),
            ("prefill[contact]", prefill.contact.as_str()),
            ("callback_url", callback_base),
            ("nonce", nonce),
        ];
        reqwest::Url::parse_with_params(&self.widget_url, params)
            .map_err(|e| CheckoutError::Other(anyhow::anyhow!("Invalid widget URL: {}", e)))
    }
}

#[async_trait]
impl PaymentWidget for HostedPaymentWidget {
    async fn collect(
        &self,
        intent: &PaymentIntent,
        prefill: &PaymentPrefill,
    ) -> Result<WidgetOutcome, CheckoutError> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(CheckoutError::CallbackBind)?;
        let addr = listener.local_addr().map_err(CheckoutError::CallbackBind)?;

        let nonce = Uuid::new_v4().to_string();
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let state = CallbackState {
            nonce: nonce.clone(),
            outcome_tx: Arc::new(Mutex::new(Some(outcome_tx))),
        };

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let app = build_router(state);
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
            {
                eprintln!("Payment callback server error: {}", e);
            }
        });

        let callback_base = format!("http://{}", addr);
        let url = self.build_checkout_url(intent, prefill, &callback_base, &nonce)?;
        debug!(%url, "opening hosted payment page");
        open::that(url.as_str()).map_err(CheckoutError::WidgetLaunch)?;

        let outcome = match tokio::time::timeout(self.timeout, outcome_rx).await {
            Ok(Ok(outcome)) => outcome,
            // Sender dropped or timer elapsed: nobody is coming back.
            Ok(Err(_)) => WidgetOutcome::Cancelled,
            Err(_) => {
                info!(timeout_secs = self.timeout.as_secs(), "payment widget timed out");
                WidgetOutcome::Cancelled
            }
        };

        let _ = shutdown_tx.send(());
        Ok(outcome)
    }
}

fn build_router(state: CallbackState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/callback", post(callback_handler))
        .route("/cancel", get(cancel_handler))
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn callback_handler(
    State(state): State<CallbackState>,
    Query(query): Query<CallbackQuery>,
    Json(confirmation): Json<PaymentConfirmation>,
) -> (StatusCode, &'static str) {
    if query.nonce != state.nonce {
        return (StatusCode::FORBIDDEN, "unknown checkout attempt");
    }
    state.resolve(WidgetOutcome::Completed(confirmation));
    (
        StatusCode::OK,
        "Payment received. You can close this window.",
    )
}

async fn cancel_handler(
    State(state): State<CallbackState>,
    Query(query): Query<CallbackQuery>,
) -> (StatusCode, &'static str) {
    if query.nonce != state.nonce {
        return (StatusCode::FORBIDDEN, "unknown checkout attempt");
    }
    state.resolve(WidgetOutcome::Cancelled);
    (
        StatusCode::OK,
        "Checkout cancelled. You can close this window.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    fn test_state() -> (CallbackState, oneshot::Receiver<WidgetOutcome>) {
        let (tx, rx) = oneshot::channel();
        let state = CallbackState {
            nonce: "nonce-1".to_string(),
            outcome_tx: Arc::new(Mutex::new(Some(tx))),
        };
        (state, rx)
    }

    fn confirmation_json() -> String {
        serde_json::to_string(&PaymentConfirmation {
            order_id: "pay_1".to_string(),
            payment_id: "tx_1".to_string(),
            signature: "sig".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_callback_resolves_completed() {
        let (state, rx) = test_state();
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/callback?nonce=nonce-1")
                    .header("content-type", "application/json")
                    .body(Body::from(confirmation_json()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(String::from_utf8_lossy(&body).contains("Payment received"));

        match rx.await.unwrap() {
            WidgetOutcome::Completed(confirmation) => {
                assert_eq!(confirmation.order_id, "pay_1");
                assert_eq!(confirmation.payment_id, "tx_1");
                assert_eq!(confirmation.signature, "sig");
            }
            other => panic!("Expected Completed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_callback_with_wrong_nonce_is_rejected() {
        let (state, mut rx) = test_state();
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/callback?nonce=someone-else")
                    .header("content-type", "application/json")
                    .body(Body::from(confirmation_json()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        // The attempt is still unresolved
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_cancel_resolves_cancelled() {
        let (state, rx) = test_state();
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/cancel?nonce=nonce-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(rx.await.unwrap(), WidgetOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_second_resolution_is_ignored() {
        let (state, rx) = test_state();

        assert!(state.resolve(WidgetOutcome::Cancelled));
        assert!(!state.resolve(WidgetOutcome::Completed(PaymentConfirmation {
            order_id: "x".into(),
            payment_id: "y".into(),
            signature: "z".into(),
        })));
        assert_eq!(rx.await.unwrap(), WidgetOutcome::Cancelled);
    }

    #[test]
    fn test_build_checkout_url_carries_wiring() {
        let widget = HostedPaymentWidget::new(
            "https://checkout.example/v1/checkout",
            "rzp_test_key",
            Duration::from_secs(300),
        );
        let intent = PaymentIntent {
            id: "pay_1".to_string(),
            amount: 299,
            currency: "INR".to_string(),
        };
        let prefill = PaymentPrefill {
            name: "Priya".to_string(),
            email: "priya@example.com".to_string(),
            contact: "5551234567".to_string(),
        };

        let url = widget
            .build_checkout_url(&intent, &prefill, "http://127.0.0.1:49152", "nonce-1")
            .unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("key=rzp_test_key"));
        assert!(query.contains("order_id=pay_1"));
        assert!(query.contains("amount=299"));
        assert!(query.contains("nonce=nonce-1"));
        assert!(query.contains("callback_url=http"));
    }
}
