//! Shared UI icons.
//!
//! Emoji constants used across the terminal output, with plain-text
//! fallbacks for terminals without emoji support.

use console::Emoji;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[i]");

// Storefront indicators
pub static PIZZA: Emoji<'_, '_> = Emoji("🍕 ", "");
pub static CART: Emoji<'_, '_> = Emoji("🛒 ", "");
pub static CARD: Emoji<'_, '_> = Emoji("💳 ", "");

// Order status indicators
pub static CLOCK: Emoji<'_, '_> = Emoji("⏱️  ", "[T]");
pub static OVEN: Emoji<'_, '_> = Emoji("🍳 ", "[K]");
pub static TRUCK: Emoji<'_, '_> = Emoji("🚚 ", "[D]");
