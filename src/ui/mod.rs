// src/ui/mod.rs
//! Bindings between the flows and whatever surface renders them.
//!
//! Each flow receives its inputs and display targets at construction, so the same
//! flow runs against the terminal or against the in-memory bindings in tests.

pub mod console;
pub mod memory;

/// A text field the user types into.
pub trait TextInput: Send + Sync {
    fn value(&self) -> String;
}

/// The event raised by a form submission.
pub trait SubmitEvent {
    /// Suppresses the surface's native handling of the event.
    fn prevent_default(&mut self);
}

/// Transient, one-off messages to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// The expressions list region.
pub trait ListView: Send + Sync {
    /// Clears whatever was rendered before and renders `lines` in order.
    fn replace(&self, lines: Vec<String>);
}

/// The single-expression detail region.
pub trait DetailView: Send + Sync {
    fn show(&self, text: String);
}

/// A text field backed by a mutex; the surface writes it, the flow reads it on trigger.
#[derive(Default)]
pub struct InputField {
    value: std::sync::Mutex<String>,
}

impl InputField {
    pub fn new(value: &str) -> Self {
        Self {
            value: std::sync::Mutex::new(value.to_string()),
        }
    }

    pub fn set(&self, value: &str) {
        if let Ok(mut current) = self.value.lock() {
            *current = value.to_string();
        }
    }
}

impl TextInput for InputField {
    fn value(&self) -> String {
        self.value.lock().map(|v| v.clone()).unwrap_or_default()
    }
}
