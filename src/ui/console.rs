// src/ui/console.rs
//! Terminal rendering of the three display targets.

use super::{DetailView, ListView, Notifier, SubmitEvent};

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("🔔 {}", message);
    }
}

pub struct ConsoleList;

impl ListView for ConsoleList {
    fn replace(&self, lines: Vec<String>) {
        println!("{}", render_list(&lines));
    }
}

/// The whole list region as one block, so it is written in a single call.
pub fn render_list(lines: &[String]) -> String {
    let mut out = String::from("📋 Expressions:");
    if lines.is_empty() {
        out.push_str("\n   (none)");
    }
    for line in lines {
        out.push_str("\n   ");
        out.push_str(line);
    }
    out
}

pub struct ConsoleDetail;

impl DetailView for ConsoleDetail {
    fn show(&self, text: String) {
        println!("🔎 Expression details:\n{}", text);
    }
}

/// A submit typed at the prompt. The terminal has no default action to suppress.
#[derive(Default)]
pub struct CommandEvent;

impl SubmitEvent for CommandEvent {
    fn prevent_default(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_list_block() {
        let lines = vec![
            "ID: 1, Expression: 2+2, Status: done, Result: 4".to_string(),
            "ID: 2, Expression: 3*3, Status: processing, Result: N/A".to_string(),
        ];
        assert_eq!(
            render_list(&lines),
            "📋 Expressions:\n   ID: 1, Expression: 2+2, Status: done, Result: 4\n   ID: 2, Expression: 3*3, Status: processing, Result: N/A"
        );
        assert_eq!(render_list(&[]), "📋 Expressions:\n   (none)");
    }
}
