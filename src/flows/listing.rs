// src/flows/listing.rs
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::client::ServiceClient;
use crate::flows::RequestGeneration;
use crate::models::ExpressionRecord;
use crate::ui::{ListView, Notifier};

/// Fetches every expression and re-renders the list region from scratch.
pub struct ListingFlow<C> {
    client: Arc<C>,
    view: Arc<dyn ListView>,
    notifier: Arc<dyn Notifier>,
    generation: RequestGeneration,
}

impl<C: ServiceClient + 'static> ListingFlow<C> {
    pub fn new(client: Arc<C>, view: Arc<dyn ListView>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            view,
            notifier,
            generation: RequestGeneration::new(),
        }
    }

    /// Handles a refresh action on its own task.
    pub fn trigger(self: &Arc<Self>) -> JoinHandle<()> {
        let token = self.generation.issue();
        let this = Arc::clone(self);
        tokio::spawn(async move { this.complete(token).await })
    }

    pub async fn refresh(&self) {
        let token = self.generation.issue();
        self.complete(token).await
    }

    async fn complete(&self, token: u64) {
        let outcome = self.client.list_all().await;

        if !self.generation.is_current(token) {
            log::debug!("Discarding stale expressions list (request {})", token);
            return;
        }

        match outcome {
            Ok(records) => {
                log::debug!("Rendering {} expressions", records.len());
                let lines = records.iter().map(ExpressionRecord::summary_line).collect();
                self.view.replace(lines);
            }
            Err(e) => {
                self.notifier
                    .notify(&format!("Failed to fetch expressions: {}", e));
            }
        }
    }
}
