//! Notice block API client.

use async_trait::async_trait;
use docpress_content::Block;
use docpress_core::PublishConfig;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::BlockStore;
use crate::types::{BlockRecord, Envelope, NewBlock};
use crate::{Error, Result};

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "api-key";

/// Body of the batch attach call.
#[derive(Serialize)]
struct BlocksBody<'a> {
    blocks: &'a [Block],
}

/// HTTP client for the Notice block API.
#[derive(Debug, Clone)]
pub struct NoticeClient {
    http: reqwest::Client,
    base_url: String,
}

impl NoticeClient {
    /// Create a client for the endpoint and credentials in `config`.
    pub fn new(config: &PublishConfig) -> Result<Self> {
        let mut api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| Error::InvalidApiKey)?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and fail on any non-success status.
    async fn send(
        &self,
        request: RequestBuilder,
        method: &'static str,
        path: &str,
    ) -> Result<Response> {
        tracing::debug!(method, path, "Sending block API request");
        let response = request.send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(Error::Api {
            method,
            path: path.to_string(),
            status: status.as_u16(),
            body,
        })
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &'static str,
        path: &str,
    ) -> Result<T> {
        let response = self.send(request, method, path).await?;
        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl BlockStore for NoticeClient {
    async fn get_block(&self, id: &str) -> Result<BlockRecord> {
        let path = format!("/blocks/{id}");
        let request = self.http.get(self.url(&path));
        self.send_json(request, "GET", &path).await
    }

    async fn delete_block(&self, id: &str) -> Result<()> {
        let path = format!("/blocks/{id}");
        let request = self.http.delete(self.url(&path));
        self.send(request, "DELETE", &path).await?;
        Ok(())
    }

    async fn create_block(&self, block: &NewBlock) -> Result<BlockRecord> {
        let path = "/blocks";
        let request = self.http.post(self.url(path)).json(block);
        self.send_json(request, "POST", path).await
    }

    async fn put_blocks(&self, parent_id: &str, blocks: &[Block]) -> Result<()> {
        let path = format!("/blocks/{parent_id}/blocks");
        let request = self.http.put(self.url(&path)).json(&BlocksBody { blocks });
        self.send(request, "PUT", &path).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> PublishConfig {
        PublishConfig::new(Some("key".into()), Some("proj".into())).unwrap()
    }

    #[test]
    fn test_new_uses_config_base_url() {
        let client = NoticeClient::new(&config().with_base_url("http://localhost:9/")).unwrap();
        assert_eq!(client.base_url, "http://localhost:9");
        assert_eq!(client.url("/blocks/x"), "http://localhost:9/blocks/x");
    }

    #[test]
    fn test_invalid_api_key_rejected() {
        let config = PublishConfig::new(Some("bad\nkey".into()), Some("proj".into())).unwrap();
        let err = NoticeClient::new(&config).unwrap_err();
        assert!(matches!(err, Error::InvalidApiKey));
    }
}
