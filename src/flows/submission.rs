// src/flows/submission.rs
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::client::ServiceClient;
use crate::ui::{Notifier, SubmitEvent, TextInput};

/// Sends the expression field to the service and reports the assigned identifier.
pub struct SubmissionFlow<C> {
    client: Arc<C>,
    input: Arc<dyn TextInput>,
    notifier: Arc<dyn Notifier>,
}

impl<C: ServiceClient + 'static> SubmissionFlow<C> {
    pub fn new(client: Arc<C>, input: Arc<dyn TextInput>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            input,
            notifier,
        }
    }

    /// Handles a form submission. The field is read before this returns; the request
    /// runs on its own task. Empty text is sent as-is.
    pub fn trigger(self: &Arc<Self>, event: &mut dyn SubmitEvent) -> JoinHandle<()> {
        event.prevent_default();
        let expression = self.input.value();
        let this = Arc::clone(self);
        tokio::spawn(async move { this.submit(&expression).await })
    }

    pub async fn submit(&self, expression: &str) {
        match self.client.submit(expression).await {
            Ok(id) => {
                log::info!("Expression accepted with id {}", id);
                self.notifier
                    .notify(&format!("Expression submitted successfully! ID: {}", id));
            }
            Err(e) => {
                self.notifier
                    .notify(&format!("Failed to submit expression: {}", e));
            }
        }
    }
}
