// src/ui/memory.rs
//! Headless bindings that keep everything in memory.

use std::sync::Mutex;

use super::{DetailView, ListView, Notifier, SubmitEvent};

/// Records whether the default action was suppressed.
#[derive(Default, Debug)]
pub struct MemoryEvent {
    pub default_prevented: bool,
}

impl SubmitEvent for MemoryEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

#[derive(Default)]
pub struct MemoryNotifier {
    messages: Mutex<Vec<String>>,
}

impl MemoryNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.messages().pop()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

#[derive(Default)]
pub struct MemoryList {
    lines: Mutex<Vec<String>>,
    renders: Mutex<usize>,
}

impl MemoryList {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// How many times the region has been re-rendered.
    pub fn renders(&self) -> usize {
        self.renders.lock().map(|r| *r).unwrap_or_default()
    }
}

impl ListView for MemoryList {
    fn replace(&self, lines: Vec<String>) {
        if let Ok(mut current) = self.lines.lock() {
            *current = lines;
        }
        if let Ok(mut renders) = self.renders.lock() {
            *renders += 1;
        }
    }
}

#[derive(Default)]
pub struct MemoryDetail {
    text: Mutex<Option<String>>,
}

impl MemoryDetail {
    pub fn text(&self) -> Option<String> {
        self.text.lock().ok().and_then(|t| t.clone())
    }
}

impl DetailView for MemoryDetail {
    fn show(&self, text: String) {
        if let Ok(mut current) = self.text.lock() {
            *current = Some(text);
        }
    }
}
