//! Catalog collaborator: read-only ingredient inventory.
//!
//! The catalog is eventually consistent. Prices captured into a cart item are
//! snapshots taken at selection time and are never reconciled against later
//! catalog reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::cart::Ingredient;
use crate::errors::ApiError;

/// Ingredient categories the backend serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientKind {
    Base,
    Sauce,
    Cheese,
    Veggie,
}

impl IngredientKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientKind::Base => "base",
            IngredientKind::Sauce => "sauce",
            IngredientKind::Cheese => "cheese",
            IngredientKind::Veggie => "veggie",
        }
    }
}

impl std::fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IngredientKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "base" => Ok(IngredientKind::Base),
            "sauce" => Ok(IngredientKind::Sauce),
            "cheese" => Ok(IngredientKind::Cheese),
            "veggie" | "veggies" => Ok(IngredientKind::Veggie),
            _ => anyhow::bail!(
                "Invalid ingredient type '{}'. Valid values: base, sauce, cheese, veggie",
                s
            ),
        }
    }
}

/// One inventory entry as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: IngredientKind,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub price: u32,
    pub current_stock: i64,
    pub threshold_level: i64,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Capture this entry as a priced ingredient snapshot.
    pub fn to_ingredient(&self) -> Ingredient {
        Ingredient {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
        }
    }
}

/// Client for the inventory endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    api: ApiClient,
}

impl CatalogClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch all inventory entries of one kind.
    pub async fn fetch_inventory(&self, kind: IngredientKind) -> Result<Vec<InventoryItem>, ApiError> {
        self.api
            .get_json("/inventory", &[("type", kind.as_str())], None)
            .await
    }

    /// Fetch inventory of one kind, filtered to entries marked available.
    pub async fn fetch_available(&self, kind: IngredientKind) -> Result<Vec<InventoryItem>, ApiError> {
        let items = self.fetch_inventory(kind).await?;
        Ok(items.into_iter().filter(|i| i.is_available).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "_id": "tomato",
            "type": "sauce",
            "name": "Tomato Sauce",
            "description": "Classic tomato sauce",
            "price": 39,
            "currentStock": 100,
            "thresholdLevel": 10,
            "isAvailable": true,
            "createdAt": "2026-01-15T10:00:00Z",
            "updatedAt": "2026-01-15T10:00:00Z"
        }"#
    }

    #[test]
    fn test_inventory_item_deserialize() {
        let item: InventoryItem = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(item.id, "tomato");
        assert_eq!(item.kind, IngredientKind::Sauce);
        assert_eq!(item.name, "Tomato Sauce");
        assert_eq!(item.price, 39);
        assert!(item.is_available);
        assert!(item.image_url.is_none());
    }

    #[test]
    fn test_inventory_item_with_image_url() {
        let json = sample_json().replacen(
            "\"price\"",
            "\"imageUrl\": \"https://cdn.example/tomato.png\", \"price\"",
            1,
        );
        let item: InventoryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(
            item.image_url.as_deref(),
            Some("https://cdn.example/tomato.png")
        );
    }

    #[test]
    fn test_to_ingredient_captures_snapshot_fields() {
        let item: InventoryItem = serde_json::from_str(sample_json()).unwrap();
        let ingredient = item.to_ingredient();
        assert_eq!(ingredient.id, "tomato");
        assert_eq!(ingredient.name, "Tomato Sauce");
        assert_eq!(ingredient.price, 39);
    }

    #[test]
    fn test_ingredient_kind_query_values() {
        assert_eq!(IngredientKind::Base.as_str(), "base");
        assert_eq!(IngredientKind::Veggie.as_str(), "veggie");
        assert_eq!(
            serde_json::to_string(&IngredientKind::Cheese).unwrap(),
            "\"cheese\""
        );
    }

    #[test]
    fn test_ingredient_kind_from_str() {
        assert_eq!("base".parse::<IngredientKind>().unwrap(), IngredientKind::Base);
        assert_eq!(
            "Veggies".parse::<IngredientKind>().unwrap(),
            IngredientKind::Veggie
        );
        assert!("crust".parse::<IngredientKind>().is_err());
    }

    #[test]
    fn test_unavailable_items_parse() {
        let json = sample_json().replace("\"isAvailable\": true", "\"isAvailable\": false");
        let item: InventoryItem = serde_json::from_str(&json).unwrap();
        assert!(!item.is_available);
    }
}
