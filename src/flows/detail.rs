// src/flows/detail.rs
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::client::ServiceClient;
use crate::errors::CalcError;
use crate::flows::RequestGeneration;
use crate::ui::{DetailView, Notifier, TextInput};

/// Looks up one expression by the identifier the user typed and shows the full record.
pub struct DetailFlow<C> {
    client: Arc<C>,
    input: Arc<dyn TextInput>,
    view: Arc<dyn DetailView>,
    notifier: Arc<dyn Notifier>,
    generation: RequestGeneration,
}

impl<C: ServiceClient + 'static> DetailFlow<C> {
    pub fn new(
        client: Arc<C>,
        input: Arc<dyn TextInput>,
        view: Arc<dyn DetailView>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            input,
            view,
            notifier,
            generation: RequestGeneration::new(),
        }
    }

    /// Handles a lookup action. Returns `None` when the identifier field is blank,
    /// in which case no request is made.
    pub fn trigger(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let id = self.identifier()?;
        let token = self.generation.issue();
        let this = Arc::clone(self);
        Some(tokio::spawn(async move { this.complete(&id, token).await }))
    }

    pub async fn lookup(&self) {
        if let Some(id) = self.identifier() {
            let token = self.generation.issue();
            self.complete(&id, token).await
        }
    }

    fn identifier(&self) -> Option<String> {
        let id = self.input.value().trim().to_string();
        if id.is_empty() {
            self.notifier.notify(&CalcError::EmptyIdentifier.to_string());
            return None;
        }
        Some(id)
    }

    async fn complete(&self, id: &str, token: u64) {
        let outcome = self.client.get_by_id(id).await;

        if !self.generation.is_current(token) {
            log::debug!("Discarding stale lookup of {} (request {})", id, token);
            return;
        }

        match outcome {
            Ok(record) => self.view.show(record.pretty()),
            Err(e) => {
                self.notifier
                    .notify(&format!("Failed to fetch expression: {}", e));
            }
        }
    }
}
