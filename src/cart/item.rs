//! Cart line items and their captured price snapshots.

use serde::{Deserialize, Serialize};

/// One ingredient selection, captured at the moment it was chosen.
///
/// The price here is a snapshot: later catalog price changes never touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub price: u32,
}

/// One configured pizza in the cart.
///
/// `total_price` is computed once at construction as the sum of all component
/// prices and stored redundantly. It is never recomputed afterward, so an
/// item keeps the price the customer saw even if the catalog moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub base: Ingredient,
    pub sauce: Ingredient,
    pub cheese: Ingredient,
    pub veggies: Vec<Ingredient>,
    pub total_price: u32,
}

impl CartItem {
    /// Build an item from the chosen components, capturing the price snapshot.
    ///
    /// Veggies are de-duplicated by `id`, keeping the first occurrence and
    /// preserving selection order.
    pub fn new(
        base: Ingredient,
        sauce: Ingredient,
        cheese: Ingredient,
        veggies: Vec<Ingredient>,
    ) -> Self {
        let mut seen = std::collections::HashSet::new();
        let veggies: Vec<Ingredient> = veggies
            .into_iter()
            .filter(|v| seen.insert(v.id.clone()))
            .collect();

        let total_price = base.price
            + sauce.price
            + cheese.price
            + veggies.iter().map(|v| v.price).sum::<u32>();

        Self {
            base,
            sauce,
            cheese,
            veggies,
            total_price,
        }
    }

    /// Short human-readable description of the configuration.
    pub fn describe(&self) -> String {
        let mut desc = format!(
            "Base: {}, Sauce: {}, Cheese: {}",
            self.base.name, self.sauce.name, self.cheese.name
        );
        if !self.veggies.is_empty() {
            let names: Vec<&str> = self.veggies.iter().map(|v| v.name.as_str()).collect();
            desc.push_str(&format!(", Veggies: {}", names.join(", ")));
        }
        desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(id: &str, price: u32) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: id.to_string(),
            price,
        }
    }

    #[test]
    fn test_total_price_is_sum_of_components() {
        let item = CartItem::new(
            ingredient("thin", 99),
            ingredient("tomato", 39),
            ingredient("mozzarella", 69),
            vec![ingredient("onion", 20), ingredient("olive", 30)],
        );
        assert_eq!(item.total_price, 99 + 39 + 69 + 20 + 30);
    }

    #[test]
    fn test_no_veggies() {
        let item = CartItem::new(
            ingredient("thin", 100),
            ingredient("pesto", 59),
            ingredient("cheddar", 79),
            vec![],
        );
        assert_eq!(item.total_price, 238);
        assert!(item.veggies.is_empty());
    }

    #[test]
    fn test_duplicate_veggies_collapsed_by_id() {
        let item = CartItem::new(
            ingredient("thin", 100),
            ingredient("tomato", 39),
            ingredient("mozzarella", 69),
            vec![
                ingredient("onion", 20),
                ingredient("onion", 20),
                ingredient("corn", 25),
            ],
        );
        assert_eq!(item.veggies.len(), 2);
        assert_eq!(item.veggies[0].id, "onion");
        assert_eq!(item.veggies[1].id, "corn");
        // The duplicate does not count toward the snapshot
        assert_eq!(item.total_price, 100 + 39 + 69 + 20 + 25);
    }

    #[test]
    fn test_snapshot_survives_component_mutation() {
        let mut item = CartItem::new(
            ingredient("thin", 100),
            ingredient("tomato", 39),
            ingredient("mozzarella", 69),
            vec![],
        );
        // Simulate a later catalog price change leaking into the components:
        // the captured total must not move.
        item.base.price = 500;
        assert_eq!(item.total_price, 208);
    }

    #[test]
    fn test_serde_uses_camel_case_total_price() {
        let item = CartItem::new(
            ingredient("thin", 100),
            ingredient("tomato", 39),
            ingredient("mozzarella", 69),
            vec![],
        );
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"totalPrice\":208"));
        let back: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_describe_lists_components() {
        let item = CartItem::new(
            ingredient("thin", 100),
            ingredient("tomato", 39),
            ingredient("mozzarella", 69),
            vec![ingredient("onion", 20)],
        );
        let desc = item.describe();
        assert!(desc.contains("Base: thin"));
        assert!(desc.contains("Veggies: onion"));
    }
}
