//! HTTP access to the solver service.
//!
//! The page model talks to the service only through [`KnapsackApi`], so the
//! transport can be swapped (the tests use an in-memory fake).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::errors::ClientError;
use crate::models::{
    ErrorBody, GenerateResponse, ResultsRequest, ResultsResponse, SolveRequest, SolveResponse,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The three calls the page makes. The graph payload stays opaque JSON on
/// this side and is forwarded to `/results` untouched.
#[async_trait]
pub trait KnapsackApi: Send + Sync {
    async fn solve(&self, request: &SolveRequest) -> Result<SolveResponse<Value>, ClientError>;

    async fn results(
        &self,
        request: &ResultsRequest<Value>,
    ) -> Result<ResultsResponse, ClientError>;

    async fn generate(&self) -> Result<GenerateResponse, ClientError>;
}

/// reqwest-backed [`KnapsackApi`]. One round trip per call, no retries.
#[derive(Clone)]
pub struct HttpKnapsackApi {
    client: Client,
    base_url: String,
}

impl HttpKnapsackApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl KnapsackApi for HttpKnapsackApi {
    async fn solve(&self, request: &SolveRequest) -> Result<SolveResponse<Value>, ClientError> {
        let response = self.client.post(self.url("solve")).json(request).send().await?;
        decode(response).await
    }

    async fn results(
        &self,
        request: &ResultsRequest<Value>,
    ) -> Result<ResultsResponse, ClientError> {
        let response = self
            .client
            .post(self.url("results"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn generate(&self) -> Result<GenerateResponse, ClientError> {
        let response = self.client.get(self.url("generate")).send().await?;
        decode(response).await
    }
}

/// Parses a success body as `T`, or turns an error status into
/// [`ClientError::Api`] carrying the body's `message` field.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let url = response.url().path().to_string();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or_else(|_| format!("Request failed with status {}", status.as_u16()));
        warn!(%status, url = %url, message = %message, "Request rejected");
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let bytes = response.bytes().await?;
    debug!(%status, url = %url, len = bytes.len(), "Request succeeded");
    Ok(serde_json::from_slice(&bytes)?)
}
