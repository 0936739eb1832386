//! The checkout state machine's states.
//!
//! One variant per state, each carrying exactly the data that state needs.
//! The machine is linear; every network-bound transition is gated on the
//! previous collaborator response, and failure edges lead back to `Idle`
//! except for the paid-but-unrecorded case, which is pinned in
//! `Unreconciled` until an operator acknowledges it.

use crate::api::payment::{PaymentConfirmation, PaymentIntent};
use crate::checkout::address::DeliveryAddress;

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutState {
    /// No attempt in flight.
    Idle,
    /// Checking the delivery address; no network calls yet.
    ValidatingAddress,
    /// Waiting on the payment collaborator for an intent.
    AwaitingPaymentIntent { address: DeliveryAddress },
    /// Hosted widget is open; parked until it resolves or times out.
    AwaitingUserPayment {
        address: DeliveryAddress,
        intent: PaymentIntent,
    },
    /// Forwarding the widget's signed confirmation for verification.
    VerifyingPayment {
        address: DeliveryAddress,
        confirmation: PaymentConfirmation,
    },
    /// Payment verified; submitting the order payload.
    PersistingOrder {
        address: DeliveryAddress,
        payment_id: String,
    },
    /// Payment captured but no order on file. The cart is preserved and new
    /// attempts are refused until this is acknowledged.
    Unreconciled { payment_id: String },
    /// Order placed; carries the identifier for display.
    Success { order_id: String },
}

impl CheckoutState {
    pub fn is_idle(&self) -> bool {
        matches!(self, CheckoutState::Idle)
    }

    /// Whether a new checkout attempt may start from this state.
    ///
    /// `Success` is terminal but restartable; `Unreconciled` deliberately is
    /// not — it must be acknowledged first so a captured payment is never
    /// silently forgotten.
    pub fn can_start(&self) -> bool {
        matches!(self, CheckoutState::Idle | CheckoutState::Success { .. })
    }

    /// Progress label shown while the machine sits in this state.
    pub fn label(&self) -> &'static str {
        match self {
            CheckoutState::Idle => "Idle",
            CheckoutState::ValidatingAddress => "Validating delivery address",
            CheckoutState::AwaitingPaymentIntent { .. } => "Requesting payment intent",
            CheckoutState::AwaitingUserPayment { .. } => "Waiting for payment in browser",
            CheckoutState::VerifyingPayment { .. } => "Verifying payment",
            CheckoutState::PersistingOrder { .. } => "Placing order",
            CheckoutState::Unreconciled { .. } => "Payment captured, order not recorded",
            CheckoutState::Success { .. } => "Order placed",
        }
    }
}

impl Default for CheckoutState {
    fn default() -> Self {
        CheckoutState::Idle
    }
}
