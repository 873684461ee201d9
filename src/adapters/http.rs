use crate::domain::model::{MuhuratQuery, MuhuratResponse};
use crate::domain::ports::{ConfigProvider, MuhuratApi};
use crate::utils::error::{MuhuratError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// GETs the configured `/ai-muhurat-range` endpoint, once, with no timeout.
pub struct HttpMuhuratApi<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpMuhuratApi<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl<C: ConfigProvider> MuhuratApi for HttpMuhuratApi<C> {
    async fn fetch(&self, query: &MuhuratQuery) -> Result<MuhuratResponse> {
        tracing::debug!("Making API request to: {}", self.config.api_endpoint());
        let response = self
            .client
            .get(self.config.api_endpoint())
            .query(&query.as_params())
            .send()
            .await?;

        let http_status = response.status();
        tracing::debug!("API response status: {}", http_status);
        if !http_status.is_success() {
            tracing::warn!("Muhurat service answered HTTP {}", http_status);
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

/// Validates the payload before anything is rendered from it.
///
/// The HTTP status code is not consulted; only the `status` field decides success.
pub fn parse_response(body: &str) -> Result<MuhuratResponse> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| MuhuratError::malformed(format!("body is not valid JSON: {}", e)))?;

    let status = value
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| MuhuratError::malformed("status is missing or not a string"))?;
    if status != "success" {
        return Err(MuhuratError::ApplicationStatus {
            status: status.to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| MuhuratError::malformed(e.to_string()))
}
