//! User-visible notifications (the storefront's toast channel).
//!
//! Cart and checkout signals go through a `Notify` trait so the cart store
//! and checkout orchestrator stay testable: the binary injects
//! [`ConsoleNotifier`], tests inject a recording fake.

use console::style;

use super::icons::{CHECK, CROSS, INFO};

/// Sink for user-visible signals (the toast channel).
pub trait Notify: Send + Sync {
    /// A positive confirmation, e.g. "Pizza added to cart!".
    fn success(&self, message: &str);
    /// A neutral notice, e.g. "Item removed from cart".
    fn info(&self, message: &str);
    /// A failure the user must act on.
    fn error(&self, message: &str);
}

/// Styled terminal notifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notify for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("{}{}", CHECK, style(message).green());
    }

    fn info(&self, message: &str) {
        println!("{}{}", INFO, style(message).cyan());
    }

    fn error(&self, message: &str) {
        eprintln!("{}{}", CROSS, style(message).red());
    }
}

/// Notifier that records every signal, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: std::sync::Mutex<Vec<(&'static str, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(&'static str, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notify for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(("success", message.to_string()));
    }

    fn info(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(("info", message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(("error", message.to_string()));
    }
}
