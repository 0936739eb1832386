//! The checkout state machine driver.
//!
//! One orchestrator instance owns one session's checkout attempts. The flow
//! is strictly sequential: each collaborator call is awaited before the next
//! state is entered, and a failed transition surfaces its message and steps
//! back to `Idle` — with one deliberate exception. If payment verification
//! succeeded but order persistence failed, the user has been charged with no
//! order on file; the machine pins itself in `Unreconciled`, keeps the cart
//! intact, and refuses new attempts until the captured payment is
//! acknowledged.

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::orders::{OrderDraft, OrderLine, OrderService};
use crate::api::payment::PaymentGateway;
use crate::cart::CartStore;
use crate::checkout::address::{AddressErrors, AddressInput};
use crate::checkout::state::CheckoutState;
use crate::checkout::widget::{PaymentPrefill, PaymentWidget, WidgetOutcome};
use crate::errors::CheckoutError;
use crate::session::Session;
use crate::ui::{CheckoutProgress, Notify};

/// How one `place_order` attempt resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Order persisted; the cart has been cleared.
    Placed { order_id: String },
    /// Checkout is undefined for an empty cart; nothing happened.
    EmptyCart,
    /// Another attempt is in flight or an unreconciled payment is pending.
    Busy,
    /// Address validation failed; no network calls were made.
    InvalidAddress(AddressErrors),
    /// The user backed out of the hosted widget (or it timed out).
    Cancelled,
    /// A collaborator rejected the attempt; the machine returned to `Idle`.
    Failed { message: String },
    /// Payment captured but the order was not recorded. Cart preserved.
    Unreconciled { payment_id: String, message: String },
}

pub struct CheckoutOrchestrator {
    payments: Arc<dyn PaymentGateway>,
    orders: Arc<dyn OrderService>,
    widget: Arc<dyn PaymentWidget>,
    notify: Arc<dyn Notify>,
    state: CheckoutState,
}

impl CheckoutOrchestrator {
    pub fn new(
        payments: Arc<dyn PaymentGateway>,
        orders: Arc<dyn OrderService>,
        widget: Arc<dyn PaymentWidget>,
        notify: Arc<dyn Notify>,
    ) -> Self {
        Self {
            payments,
            orders,
            widget,
            notify,
            state: CheckoutState::Idle,
        }
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Acknowledge a pinned `Unreconciled` payment, returning its id for the
    /// support ticket, and release the machine back to `Idle`.
    pub fn acknowledge_unreconciled(&mut self) -> Option<String> {
        if let CheckoutState::Unreconciled { payment_id } = &self.state {
            let payment_id = payment_id.clone();
            warn!(%payment_id, "unreconciled payment acknowledged");
            self.state = CheckoutState::Idle;
            return Some(payment_id);
        }
        None
    }

    fn enter(&mut self, state: CheckoutState, progress: Option<&CheckoutProgress>) {
        info!(state = state.label(), "checkout transition");
        if let Some(progress) = progress {
            progress.step(state.label());
        }
        self.state = state;
    }

    /// Run one checkout attempt to a terminal outcome.
    ///
    /// Business failures (rejections, cancellation, validation) are outcomes,
    /// not errors; `Err` means the flow's own infrastructure failed.
    pub async fn place_order(
        &mut self,
        cart: &mut CartStore,
        session: &Session,
        input: AddressInput,
        progress: Option<&CheckoutProgress>,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        if !self.state.can_start() {
            return Ok(CheckoutOutcome::Busy);
        }
        if cart.is_empty() {
            return Ok(CheckoutOutcome::EmptyCart);
        }

        self.enter(CheckoutState::ValidatingAddress, progress);
        let address = match input.validate() {
            Ok(address) => address,
            Err(errors) => {
                self.enter(CheckoutState::Idle, progress);
                return Ok(CheckoutOutcome::InvalidAddress(errors));
            }
        };

        self.enter(
            CheckoutState::AwaitingPaymentIntent {
                address: address.clone(),
            },
            progress,
        );
        let intent = match self
            .payments
            .create_intent(cart.total_amount(), &session.token)
            .await
        {
            Ok(intent) => intent,
            Err(err) => {
                let message = err.user_message("An error occurred while creating payment order");
                self.notify.error(&message);
                self.enter(CheckoutState::Idle, progress);
                return Ok(CheckoutOutcome::Failed { message });
            }
        };

        self.enter(
            CheckoutState::AwaitingUserPayment {
                address: address.clone(),
                intent: intent.clone(),
            },
            progress,
        );
        let prefill = PaymentPrefill {
            name: session.user.name.clone(),
            email: session.user.email.clone(),
            contact: address.phone.clone(),
        };
        let confirmation = match self.widget.collect(&intent, &prefill).await {
            Ok(WidgetOutcome::Completed(confirmation)) => confirmation,
            Ok(WidgetOutcome::Cancelled) => {
                self.notify.info("Payment cancelled");
                self.enter(CheckoutState::Idle, progress);
                return Ok(CheckoutOutcome::Cancelled);
            }
            Err(err) => {
                // Infrastructure failure: do not leave the machine parked.
                self.enter(CheckoutState::Idle, progress);
                return Err(err);
            }
        };

        self.enter(
            CheckoutState::VerifyingPayment {
                address: address.clone(),
                confirmation: confirmation.clone(),
            },
            progress,
        );
        let verified = match self.payments.verify(&confirmation, &session.token).await {
            Ok(verified) => verified,
            Err(err) => {
                let message = err.user_message("An error occurred during payment processing");
                self.notify.error(&message);
                self.enter(CheckoutState::Idle, progress);
                return Ok(CheckoutOutcome::Failed { message });
            }
        };

        self.enter(
            CheckoutState::PersistingOrder {
                address: address.clone(),
                payment_id: verified.payment_id.clone(),
            },
            progress,
        );
        // Re-derive the payload from the captured snapshots, not the catalog.
        let draft = OrderDraft {
            items: cart.items().iter().map(OrderLine::from).collect(),
            total_amount: cart.total_amount(),
            payment_id: verified.payment_id.clone(),
            address,
        };
        match self.orders.create(&draft, &session.token).await {
            Ok(record) => {
                cart.clear()?;
                self.enter(
                    CheckoutState::Success {
                        order_id: record.id.clone(),
                    },
                    progress,
                );
                self.notify.success("Order placed successfully!");
                Ok(CheckoutOutcome::Placed {
                    order_id: record.id,
                })
            }
            Err(err) => {
                let message = err.user_message("An error occurred during payment processing");
                warn!(payment_id = %verified.payment_id, %message, "order creation failed after capture");
                self.notify.error(&message);
                // The cart is deliberately not cleared: the user paid and
                // their order description is the only record of what for.
                self.enter(
                    CheckoutState::Unreconciled {
                        payment_id: verified.payment_id.clone(),
                    },
                    progress,
                );
                Ok(CheckoutOutcome::Unreconciled {
                    payment_id: verified.payment_id,
                    message,
                })
            }
        }
    }
}
