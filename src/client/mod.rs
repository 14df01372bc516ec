// src/client/mod.rs

use crate::errors::Result;
use crate::models::{ExpressionRecord, Identifier};

pub mod http;

pub use http::HttpServiceClient;

/// The three calls the client makes against the evaluation service.
///
/// Every call resolves on its own; none of them blocks another, and none mutates local state.
pub trait ServiceClient: Send + Sync {
    /// Submits an expression and returns the identifier the service assigned to it.
    fn submit(&self, expression: &str) -> impl std::future::Future<Output = Result<Identifier>> + Send;

    /// Fetches every known expression, in the order the service returns them.
    fn list_all(&self) -> impl std::future::Future<Output = Result<Vec<ExpressionRecord>>> + Send;

    /// Fetches a single expression by its identifier.
    fn get_by_id(&self, id: &str) -> impl std::future::Future<Output = Result<ExpressionRecord>> + Send;
}
