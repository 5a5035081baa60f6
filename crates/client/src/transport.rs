use async_trait::async_trait;
use form::SubmitPayload;
use reqwest::Client;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::TransportError;

/// Delivers a submit payload to the persistence endpoint.
///
/// Any non-2xx answer is an error. On success the response body is returned
/// for logging only.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn submit(&self, payload: &SubmitPayload) -> Result<String, TransportError>;
}

/// JSON-over-HTTP transport posting to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn submit(&self, payload: &SubmitPayload) -> Result<String, TransportError> {
        debug!(endpoint = %self.endpoint, fields = payload.fields.len(), "posting submission");
        let response = self.client.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
