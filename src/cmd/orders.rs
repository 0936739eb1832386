//! Order history and detail views.

use anyhow::Result;
use console::style;

use pizzacraft::api::ApiClient;
use pizzacraft::api::orders::{OrderRecord, OrdersClient};
use pizzacraft::config::Config;
use pizzacraft::session::SessionStore;
use pizzacraft::ui::{format_currency, status_badge};

pub async fn cmd_orders(config: &Config) -> Result<()> {
    let Some(session) = SessionStore::new(config.session_file.clone()).load() else {
        println!("Please sign in first: pizzacraft login");
        return Ok(());
    };

    let orders = OrdersClient::new(ApiClient::new(config.api_url.clone()));
    let records = orders.list_user_orders(&session.token).await?;

    println!();
    if records.is_empty() {
        println!("No orders yet. Build a pizza and check out!");
        println!();
        return Ok(());
    }

    println!("{}", style("Your orders").bold());
    for record in &records {
        println!(
            "  {}  {}  {:>10}  {}",
            record.id,
            record.created_at.format("%Y-%m-%d %H:%M"),
            format_currency(record.total_amount),
            status_badge(record.status)
        );
    }
    println!();

    Ok(())
}

pub async fn cmd_order_detail(config: &Config, order_id: &str) -> Result<()> {
    let Some(session) = SessionStore::new(config.session_file.clone()).load() else {
        println!("Please sign in first: pizzacraft login");
        return Ok(());
    };

    let orders = OrdersClient::new(ApiClient::new(config.api_url.clone()));
    let record = orders.order_details(order_id, &session.token).await?;
    print_order(&record);

    Ok(())
}

fn print_order(record: &OrderRecord) {
    println!();
    println!(
        "{} {}  {}",
        style("Order").bold(),
        record.id,
        status_badge(record.status)
    );
    println!("  Placed: {}", record.created_at.format("%Y-%m-%d %H:%M"));
    if let Some(payment_id) = &record.payment_id {
        println!("  Payment: {}", payment_id);
    }
    println!();

    for (index, line) in record.items.iter().enumerate() {
        println!("  Custom Pizza #{}", index + 1);
        println!(
            "    Base: {}, Sauce: {}, Cheese: {}",
            line.base.name, line.sauce.name, line.cheese.name
        );
        if !line.veggies.is_empty() {
            let names: Vec<&str> = line.veggies.iter().map(|v| v.name.as_str()).collect();
            println!("    Veggies: {}", names.join(", "));
        }
    }

    println!();
    println!(
        "  Total: {}",
        style(format_currency(record.total_amount)).bold()
    );
    println!();
}
