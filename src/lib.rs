//! # PizzaCraft client
//!
//! Headless storefront client for the PizzaCraft backend: browse the
//! ingredient catalog, compose pizzas, manage a locally persisted cart, and
//! drive the payment/order checkout sequence against the backend
//! collaborators.
//!
//! The backend owns all business truth — inventory, pricing authority,
//! payment settlement, order persistence. This crate holds only the
//! session-scoped cart, the checkout state machine, and the HTTP clients
//! that talk to the collaborators.

pub mod api;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod errors;
pub mod session;
pub mod ui;
