//! Terminal presentation: notifications, icons, and checkout progress.

pub mod icons;
pub mod notify;
pub mod progress;

pub use notify::{ConsoleNotifier, Notify};
pub use progress::CheckoutProgress;

/// Format a whole-rupee amount the way the storefront displays prices.
pub fn format_currency(amount: u32) -> String {
    format!("₹{}.00", amount)
}

/// Colored status badge for an order, one color and icon per lifecycle step.
pub fn status_badge(status: crate::api::orders::OrderStatus) -> String {
    use crate::api::orders::OrderStatus;
    use console::style;
    use icons::{CHECK, CLOCK, OVEN, TRUCK};

    match status {
        OrderStatus::Received => format!("{}{}", CLOCK, style(status.label()).blue()),
        OrderStatus::InKitchen => format!("{}{}", OVEN, style(status.label()).yellow()),
        OrderStatus::OutForDelivery => format!("{}{}", TRUCK, style(status.label()).magenta()),
        OrderStatus::Delivered => format!("{}{}", CHECK, style(status.label()).green()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(299), "₹299.00");
        assert_eq!(format_currency(0), "₹0.00");
    }
}
