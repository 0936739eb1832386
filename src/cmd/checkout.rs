//! The checkout command: collect delivery details, pay, place the order.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use console::style;
use dialoguer::{Input, theme::ColorfulTheme};

use pizzacraft::api::ApiClient;
use pizzacraft::api::orders::OrdersClient;
use pizzacraft::api::payment::HttpPaymentGateway;
use pizzacraft::cart::CartStore;
use pizzacraft::checkout::{AddressInput, CheckoutOrchestrator, CheckoutOutcome, HostedPaymentWidget};
use pizzacraft::config::Config;
use pizzacraft::session::SessionStore;
use pizzacraft::ui::{CheckoutProgress, ConsoleNotifier, format_currency, icons::CARD};

pub async fn cmd_checkout(config: &Config) -> Result<()> {
    let Some(session) = SessionStore::new(config.session_file.clone()).load() else {
        println!("Please sign in first: pizzacraft login");
        return Ok(());
    };

    let notifier = Arc::new(ConsoleNotifier);
    let mut cart = CartStore::open(config.cart_file.clone(), notifier.clone());
    if cart.is_empty() {
        println!("Your cart is empty. Try 'pizzacraft build' first.");
        return Ok(());
    }

    println!();
    println!("{}{}", CARD, style("Checkout").bold());
    for (index, item) in cart.items().iter().enumerate() {
        println!(
            "  {}. {} — {}",
            index + 1,
            item.describe(),
            format_currency(item.total_price)
        );
    }
    println!(
        "  Total: {}",
        style(format_currency(cart.total_amount())).bold()
    );
    println!();

    let input = prompt_address()?;

    let api = ApiClient::new(config.api_url.clone());
    let mut orchestrator = CheckoutOrchestrator::new(
        Arc::new(HttpPaymentGateway::new(api.clone())),
        Arc::new(OrdersClient::new(api)),
        Arc::new(HostedPaymentWidget::new(
            config.widget_url.clone(),
            config.payment_key_id.clone(),
            Duration::from_secs(config.widget_timeout_secs),
        )),
        notifier,
    );

    let progress = CheckoutProgress::new();
    let outcome = orchestrator
        .place_order(&mut cart, &session, input, Some(&progress))
        .await?;

    match outcome {
        CheckoutOutcome::Placed { order_id } => {
            progress.finish("Order placed");
            println!();
            println!("Your order is in! Track it with: pizzacraft order {}", order_id);
        }
        CheckoutOutcome::InvalidAddress(errors) => {
            progress.clear();
            println!("{}", style("Please fix the delivery details:").red());
            for (field, message) in errors.entries() {
                println!("  {}: {}", field, message);
            }
        }
        CheckoutOutcome::Cancelled => {
            progress.finish("Payment cancelled");
            println!("No charge was made. Your cart is unchanged.");
        }
        CheckoutOutcome::Failed { .. } => {
            // The notifier already surfaced the collaborator's message.
            progress.clear();
        }
        CheckoutOutcome::Unreconciled { payment_id, .. } => {
            progress.clear();
            println!();
            println!(
                "{}",
                style("Your payment went through but the order could not be recorded.").red()
            );
            println!(
                "Keep this payment reference and contact support: {}",
                style(&payment_id).bold()
            );
            println!("Your cart has been kept so nothing is lost.");
        }
        CheckoutOutcome::EmptyCart | CheckoutOutcome::Busy => {
            progress.clear();
        }
    }

    Ok(())
}

fn prompt_address() -> Result<AddressInput> {
    let theme = ColorfulTheme::default();
    Ok(AddressInput {
        street: Input::with_theme(&theme)
            .with_prompt("Street address")
            .allow_empty(true)
            .interact_text()?,
        city: Input::with_theme(&theme)
            .with_prompt("City")
            .allow_empty(true)
            .interact_text()?,
        state: Input::with_theme(&theme)
            .with_prompt("State")
            .allow_empty(true)
            .interact_text()?,
        zip_code: Input::with_theme(&theme)
            .with_prompt("ZIP code")
            .allow_empty(true)
            .interact_text()?,
        phone: Input::with_theme(&theme)
            .with_prompt("Phone number")
            .allow_empty(true)
            .interact_text()?,
    })
}
