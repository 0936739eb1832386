//! Interactive pizza builder.
//!
//! Walks base → sauce → cheese → veggies, capturing each selection's price
//! into the cart item's snapshot at the moment of choice.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use console::style;
use dialoguer::{MultiSelect, Select, theme::ColorfulTheme};

use pizzacraft::api::ApiClient;
use pizzacraft::api::catalog::{CatalogClient, IngredientKind, InventoryItem};
use pizzacraft::cart::{CartItem, CartStore, Ingredient};
use pizzacraft::config::Config;
use pizzacraft::ui::{ConsoleNotifier, format_currency};

pub async fn cmd_build(config: &Config) -> Result<()> {
    let catalog = CatalogClient::new(ApiClient::new(config.api_url.clone()));

    println!();
    println!("{}", style("Build your pizza").bold());
    println!();

    let base = pick_one(&catalog, IngredientKind::Base, "Choose a base").await?;
    let sauce = pick_one(&catalog, IngredientKind::Sauce, "Choose a sauce").await?;
    let cheese = pick_one(&catalog, IngredientKind::Cheese, "Choose a cheese").await?;
    let veggies = pick_many(&catalog, IngredientKind::Veggie, "Add veggies (optional)").await?;

    let item = CartItem::new(base, sauce, cheese, veggies);
    println!();
    println!(
        "  {} — {}",
        item.describe(),
        style(format_currency(item.total_price)).bold()
    );

    let mut cart = CartStore::open(config.cart_file.clone(), Arc::new(ConsoleNotifier));
    cart.add_item(item)?;
    println!(
        "  Cart total: {} ({} item(s))",
        style(format_currency(cart.total_amount())).bold(),
        cart.item_count()
    );

    Ok(())
}

async fn fetch_choices(
    catalog: &CatalogClient,
    kind: IngredientKind,
) -> Result<Vec<InventoryItem>> {
    let items = catalog
        .fetch_available(kind)
        .await
        .with_context(|| format!("Failed to fetch {} options", kind))?;
    Ok(items)
}

async fn pick_one(
    catalog: &CatalogClient,
    kind: IngredientKind,
    prompt: &str,
) -> Result<Ingredient> {
    let items = fetch_choices(catalog, kind).await?;
    if items.is_empty() {
        bail!("No {} options are available right now", kind);
    }

    let labels: Vec<String> = items.iter().map(choice_label).collect();
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(items[picked].to_ingredient())
}

async fn pick_many(
    catalog: &CatalogClient,
    kind: IngredientKind,
    prompt: &str,
) -> Result<Vec<Ingredient>> {
    let items = fetch_choices(catalog, kind).await?;
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let labels: Vec<String> = items.iter().map(choice_label).collect();
    let picked = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .interact()?;

    Ok(picked.into_iter().map(|i| items[i].to_ingredient()).collect())
}

fn choice_label(item: &InventoryItem) -> String {
    format!("{} ({})", item.name, format_currency(item.price))
}
