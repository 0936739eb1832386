//! Checkout: address validation, the payment/order state machine, and the
//! hosted payment widget integration.

pub mod address;
pub mod orchestrator;
pub mod state;
pub mod widget;

pub use address::{AddressErrors, AddressInput, DeliveryAddress};
pub use orchestrator::{CheckoutOrchestrator, CheckoutOutcome};
pub use state::CheckoutState;
pub use widget::{HostedPaymentWidget, PaymentPrefill, PaymentWidget, WidgetOutcome};
