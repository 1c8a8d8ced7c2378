use std::sync::Arc;

use log::debug;

use crate::{
    config::{ConfigError, EventmobiConfig},
    error::FetchError,
};

pub const API_KEY_HEADER: &str = "X-API-KEY";

pub type ArcTransport = Arc<Box<dyn Transport>>;

/// Retrieves the raw body stored at a fully formed location.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &EventmobiConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self::with_client(client, config.api_key.clone()))
    }

    pub fn with_client(client: reqwest::Client, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);
        let mut req = self.client.get(url);
        if let Some(api_key) = &self.api_key {
            req = req.header(API_KEY_HEADER, api_key);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        resp.text().await.map_err(|e| FetchError::transport(url, e))
    }
}

#[cfg(test)]
pub use mock::MockTransport;
