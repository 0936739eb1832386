//! Catalog browsing.

use anyhow::Result;
use console::style;

use pizzacraft::api::ApiClient;
use pizzacraft::api::catalog::{CatalogClient, IngredientKind, InventoryItem};
use pizzacraft::config::Config;
use pizzacraft::ui::{format_currency, icons::PIZZA};

pub async fn cmd_menu(config: &Config, kind: Option<&str>) -> Result<()> {
    let catalog = CatalogClient::new(ApiClient::new(config.api_url.clone()));

    let kinds: Vec<IngredientKind> = match kind {
        Some(raw) => vec![raw.parse()?],
        None => vec![
            IngredientKind::Base,
            IngredientKind::Sauce,
            IngredientKind::Cheese,
            IngredientKind::Veggie,
        ],
    };

    println!();
    println!("{}{}", PIZZA, style("PizzaCraft menu").bold());

    for kind in kinds {
        let items = catalog.fetch_inventory(kind).await?;
        println!();
        println!("{}", style(heading(kind)).bold().underlined());
        if items.is_empty() {
            println!("  {}", style("Nothing on the menu right now").dim());
            continue;
        }
        for item in &items {
            print_item(item);
        }
    }
    println!();

    Ok(())
}

fn heading(kind: IngredientKind) -> &'static str {
    match kind {
        IngredientKind::Base => "Bases",
        IngredientKind::Sauce => "Sauces",
        IngredientKind::Cheese => "Cheeses",
        IngredientKind::Veggie => "Veggies",
    }
}

fn print_item(item: &InventoryItem) {
    let price = format_currency(item.price);
    if item.is_available {
        println!(
            "  {:<22} {:>10}  {}",
            item.name,
            price,
            style(&item.description).dim()
        );
    } else {
        println!(
            "  {:<22} {:>10}  {}",
            style(&item.name).dim().strikethrough(),
            style(price).dim(),
            style("currently unavailable").red().dim()
        );
    }
}
