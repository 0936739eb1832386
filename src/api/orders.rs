//! Order collaborator: creation, history, and status tracking.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::cart::{CartItem, Ingredient};
use crate::checkout::address::DeliveryAddress;
use crate::errors::ApiError;

/// One pizza in an order payload: the component tuples re-derived from the
/// captured cart snapshot, never from live catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub base: Ingredient,
    pub sauce: Ingredient,
    pub cheese: Ingredient,
    pub veggies: Vec<Ingredient>,
}

impl From<&CartItem> for OrderLine {
    fn from(item: &CartItem) -> Self {
        Self {
            base: item.base.clone(),
            sauce: item.sauce.clone(),
            cheese: item.cheese.clone(),
            veggies: item.veggies.clone(),
        }
    }
}

/// Payload submitted to create an order after payment verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub items: Vec<OrderLine>,
    pub total_amount: u32,
    pub payment_id: String,
    pub address: DeliveryAddress,
}

/// Kitchen-to-doorstep lifecycle of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "received")]
    Received,
    #[serde(rename = "in-kitchen")]
    InKitchen,
    #[serde(rename = "out-for-delivery")]
    OutForDelivery,
    #[serde(rename = "delivered")]
    Delivered,
}

impl OrderStatus {
    /// Display label: the wire value with each word capitalized.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Received => "Received",
            OrderStatus::InKitchen => "In Kitchen",
            OrderStatus::OutForDelivery => "Out For Delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An order as the backend stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub items: Vec<OrderLine>,
    pub total_amount: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The order collaborator as the checkout orchestrator consumes it.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Persist a paid order. The returned record carries the new order id.
    async fn create(&self, draft: &OrderDraft, token: &str) -> Result<OrderRecord, ApiError>;
}

/// HTTP implementation backed by the `/orders` endpoints.
#[derive(Debug, Clone)]
pub struct OrdersClient {
    api: ApiClient,
}

impl OrdersClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The signed-in user's order history, newest first per the backend.
    pub async fn list_user_orders(&self, token: &str) -> Result<Vec<OrderRecord>, ApiError> {
        self.api.get_json("/orders/user", &[], Some(token)).await
    }

    /// Full details for one order.
    pub async fn order_details(&self, order_id: &str, token: &str) -> Result<OrderRecord, ApiError> {
        self.api
            .get_json(&format!("/orders/{}", order_id), &[], Some(token))
            .await
    }
}

#[async_trait]
impl OrderService for OrdersClient {
    async fn create(&self, draft: &OrderDraft, token: &str) -> Result<OrderRecord, ApiError> {
        self.api.post_json("/orders", draft, Some(token)).await
    }
}
