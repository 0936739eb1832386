//! Cart listing and editing.

use std::sync::Arc;

use anyhow::Result;
use console::style;

use pizzacraft::cart::CartStore;
use pizzacraft::config::Config;
use pizzacraft::ui::{ConsoleNotifier, format_currency, icons::CART};

use super::super::CartCommands;

pub fn cmd_cart(config: &Config, command: Option<CartCommands>) -> Result<()> {
    let notifier = Arc::new(ConsoleNotifier);
    let mut cart = CartStore::open(config.cart_file.clone(), notifier);

    match command.unwrap_or(CartCommands::List) {
        CartCommands::List => list(&cart),
        CartCommands::Remove { index } => {
            if index == 0 || index > cart.item_count() {
                println!("No item at position {}", index);
                return Ok(());
            }
            cart.remove_item(index - 1)?;
            list(&cart);
        }
        CartCommands::Clear => {
            cart.clear()?;
            println!("Cart emptied");
        }
    }

    Ok(())
}

fn list(cart: &CartStore) {
    println!();
    if cart.is_empty() {
        println!("{}Your cart is empty. Try 'pizzacraft build'.", CART);
        println!();
        return;
    }

    println!("{}{}", CART, style("Your cart").bold());
    for (index, item) in cart.items().iter().enumerate() {
        println!(
            "  {}. {} — {}",
            index + 1,
            item.describe(),
            style(format_currency(item.total_price)).bold()
        );
    }
    println!();
    println!(
        "  {} item(s), total {}",
        cart.item_count(),
        style(format_currency(cart.total_amount())).bold()
    );
    println!();
}
