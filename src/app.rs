// src/app.rs
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use crate::client::ServiceClient;
use crate::flows::{DetailFlow, ListingFlow, SubmissionFlow};
use crate::ui::console::{CommandEvent, ConsoleDetail, ConsoleList, ConsoleNotifier};
use crate::ui::{DetailView, InputField, ListView, Notifier};

pub const USAGE: &str = "Commands:
  submit <expression>   send an expression for evaluation (alias: s)
  list                  refresh the list of expressions (aliases: refresh, l)
  get <id>              show one expression in full (alias: g)
  help                  show this message
  quit                  wait for pending requests and exit (alias: exit)";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Submit(String),
    List,
    Get(String),
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parses one line of input. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_start();
        if line.trim().is_empty() {
            return None;
        }
        // Only the separator after the command word is consumed; the rest is kept as typed.
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        let command = match word.to_lowercase().as_str() {
            "submit" | "s" => Command::Submit(rest.to_string()),
            "list" | "refresh" | "l" => Command::List,
            "get" | "g" => Command::Get(rest.trim().to_string()),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        };
        Some(command)
    }
}

/// The display targets shared by the flows.
#[derive(Clone)]
pub struct Surface {
    pub notifier: Arc<dyn Notifier>,
    pub list: Arc<dyn ListView>,
    pub detail: Arc<dyn DetailView>,
}

impl Surface {
    pub fn console() -> Self {
        Self {
            notifier: Arc::new(ConsoleNotifier),
            list: Arc::new(ConsoleList),
            detail: Arc::new(ConsoleDetail),
        }
    }
}

/// Wires the three flows to one service client and one surface.
pub struct App<C> {
    expression_input: Arc<InputField>,
    id_input: Arc<InputField>,
    submission: Arc<SubmissionFlow<C>>,
    listing: Arc<ListingFlow<C>>,
    detail: Arc<DetailFlow<C>>,
    notifier: Arc<dyn Notifier>,
    in_flight: Vec<JoinHandle<()>>,
}

impl<C: ServiceClient + 'static> App<C> {
    pub fn new(client: Arc<C>, surface: Surface) -> Self {
        let expression_input = Arc::new(InputField::default());
        let id_input = Arc::new(InputField::default());

        let submission = SubmissionFlow::new(
            client.clone(),
            expression_input.clone(),
            surface.notifier.clone(),
        );
        let listing = ListingFlow::new(client.clone(), surface.list, surface.notifier.clone());
        let detail = DetailFlow::new(
            client,
            id_input.clone(),
            surface.detail,
            surface.notifier.clone(),
        );

        Self {
            expression_input,
            id_input,
            submission: Arc::new(submission),
            listing: Arc::new(listing),
            detail: Arc::new(detail),
            notifier: surface.notifier,
            in_flight: Vec::new(),
        }
    }

    /// Runs one command. Returns `false` once the user asked to quit.
    pub fn dispatch(&mut self, command: Command) -> bool {
        self.in_flight.retain(|handle| !handle.is_finished());

        match command {
            Command::Submit(expression) => {
                self.expression_input.set(&expression);
                let handle = self.submission.trigger(&mut CommandEvent);
                self.in_flight.push(handle);
            }
            Command::List => self.in_flight.push(self.listing.trigger()),
            Command::Get(id) => {
                self.id_input.set(&id);
                if let Some(handle) = self.detail.trigger() {
                    self.in_flight.push(handle);
                }
            }
            Command::Help => println!("{}", USAGE),
            Command::Quit => return false,
            Command::Unknown(word) => {
                self.notifier
                    .notify(&format!("Unknown command '{}'. Type 'help' for usage.", word));
            }
        }
        true
    }

    pub fn pending(&self) -> usize {
        self.in_flight.iter().filter(|h| !h.is_finished()).count()
    }

    /// Waits for every request still in flight.
    pub async fn drain(&mut self) {
        let handles = std::mem::take(&mut self.in_flight);
        for result in futures::future::join_all(handles).await {
            if let Err(e) = result {
                log::error!("Flow task failed: {}", e);
            }
        }
    }

    /// Reads commands from stdin until `quit` or end of input.
    pub async fn run_console(&mut self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Some(line) = lines.next_line().await? {
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            if !self.dispatch(command) {
                break;
            }
        }

        if self.pending() > 0 {
            println!("⏳ Waiting for {} pending request(s)...", self.pending());
        }
        self.drain().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::flows::testing::{ScriptedService, record};
    use crate::models::Identifier;
    use crate::ui::memory::{MemoryDetail, MemoryList, MemoryNotifier};
    use serde_json::json;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("  "), None);
        assert_eq!(
            Command::parse("submit 2 + 2 * 3"),
            Some(Command::Submit("2 + 2 * 3".to_string()))
        );
        assert_eq!(Command::parse("s"), Some(Command::Submit(String::new())));
        assert_eq!(
            Command::parse("submit  (1 + 2) "),
            Some(Command::Submit(" (1 + 2) ".to_string()))
        );
        assert_eq!(Command::parse("REFRESH"), Some(Command::List));
        assert_eq!(Command::parse("g   42  "), Some(Command::Get("42".to_string())));
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
        assert_eq!(
            Command::parse("delete 1"),
            Some(Command::Unknown("delete".to_string()))
        );
    }

    #[tokio::test]
    async fn test_dispatch_drives_all_flows() {
        let service = Arc::new(ScriptedService::default());
        let notifier = Arc::new(MemoryNotifier::default());
        let list = Arc::new(MemoryList::default());
        let detail = Arc::new(MemoryDetail::default());
        let mut app = App::new(
            service.clone(),
            Surface {
                notifier: notifier.clone(),
                list: list.clone(),
                detail: detail.clone(),
            },
        );

        service.reply_submit(Ok(Identifier::Text("abc123".to_string())));
        service.reply_list(Ok(vec![record("abc123", "2+2", "processing", json!(null))]));
        service.reply_get(Err(CalcError::RequestFailed(404)));

        assert!(app.dispatch(Command::Submit("2+2".to_string())));
        assert!(app.dispatch(Command::List));
        assert!(app.dispatch(Command::Get("9".to_string())));
        assert!(app.dispatch(Command::Get("   ".to_string())));
        app.drain().await;

        assert_eq!(
            list.lines(),
            vec!["ID: abc123, Expression: 2+2, Status: processing, Result: N/A".to_string()]
        );
        assert!(detail.text().is_none());

        let mut messages = notifier.messages();
        messages.sort();
        assert_eq!(
            messages,
            vec![
                "Expression submitted successfully! ID: abc123".to_string(),
                "Failed to fetch expression: Error: 404".to_string(),
                "Please enter an expression ID".to_string(),
            ]
        );
        assert!(!app.dispatch(Command::Quit));
        assert_eq!(app.pending(), 0);
    }
}
