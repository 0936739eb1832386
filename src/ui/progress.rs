//! Checkout progress display, rendered via `indicatif`.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Single-line spinner that tracks the checkout state machine.
///
/// The orchestrator calls [`CheckoutProgress::step`] as it moves between
/// states; the spinner message mirrors the current state so the user can see
/// where a slow collaborator is holding things up.
pub struct CheckoutProgress {
    bar: ProgressBar,
}

impl CheckoutProgress {
    pub fn new() -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{prefix:.bold.dim} {spinner} {msg}")
            .expect("progress bar template is a valid static string");

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.set_prefix("Checkout");
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Update the spinner with the state the orchestrator just entered.
    pub fn step(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    /// Stop the spinner, leaving a final status line.
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Stop the spinner and clear the line (for failure paths where the
    /// notifier prints its own message).
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for CheckoutProgress {
    fn default() -> Self {
        Self::new()
    }
}
