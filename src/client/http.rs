// src/client/http.rs

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::client::ServiceClient;
use crate::config::AppConfig;
use crate::errors::{CalcError, Result};
use crate::models::{
    ExpressionRecord, ExpressionResponse, ExpressionsResponse, Identifier, SubmitRequest,
    SubmitResponse,
};

/// Talks to the evaluation service over HTTP.
#[derive(Clone)]
pub struct HttpServiceClient {
    client: Client,
    base_url: String,
}

impl HttpServiceClient {
    /// Creates a new `HttpServiceClient` against the configured base address.
    pub fn new(client: Client, config: &AppConfig) -> Self {
        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Fails on a non-success status, otherwise decodes the body into `T`.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    log::debug!("Response status: {} from {}", status, resp.url());

    if !status.is_success() {
        log::warn!("Evaluation service returned {} for {}", status, resp.url());
        return Err(CalcError::RequestFailed(status.as_u16()));
    }

    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

impl ServiceClient for HttpServiceClient {
    async fn submit(&self, expression: &str) -> Result<Identifier> {
        let url = self.url("/api/v1/calculate");
        log::debug!("POST {}", url);

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&SubmitRequest { expression })
            .send()
            .await?;

        let submitted: SubmitResponse = decode(resp).await?;
        Ok(submitted.id)
    }

    async fn list_all(&self) -> Result<Vec<ExpressionRecord>> {
        let url = self.url("/api/v1/expressions");
        log::debug!("GET {}", url);

        let resp = self.client.get(&url).send().await?;
        let listed: ExpressionsResponse = decode(resp).await?;
        Ok(listed.expressions)
    }

    async fn get_by_id(&self, id: &str) -> Result<ExpressionRecord> {
        let url = self.url(&format!("/api/v1/expressions/{}", id));
        log::debug!("GET {}", url);

        let resp = self.client.get(&url).send().await?;
        let found: ExpressionResponse = decode(resp).await?;
        Ok(found.expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AppConfig {
            api_base_url: "http://localhost:8080/".to_string(),
        };
        let client = HttpServiceClient::new(Client::new(), &config);
        assert_eq!(
            client.url("/api/v1/expressions"),
            "http://localhost:8080/api/v1/expressions"
        );
    }

    #[tokio::test]
    async fn test_unreachable_service_is_a_transport_error() {
        // Port 9 (discard) is closed on test machines; the connection is refused.
        let config = AppConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
        };
        let client = HttpServiceClient::new(Client::new(), &config);
        let err = client.list_all().await.unwrap_err();
        assert!(matches!(err, CalcError::Transport(_)));
    }
}
