use crate::shared::infrastructure::tag_client::{TagClient, TagClientError, TagId};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TagExistsResponse {
    is_exists: bool,
}

/// Talks to the tag service over its JSON API.
#[derive(Debug, Clone)]
pub struct HttpTagClient {
    client: Client,
    base_url: String,
}

impl HttpTagClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TagClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TagClientError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn tag_url(&self, tag_id: TagId) -> String {
        format!("{}/api/v1/tag/{}", self.base_url, tag_id)
    }

    async fn get(
        &self,
        url: String,
        tag_id: TagId,
        conceal_private_key: bool,
    ) -> Result<reqwest::Response, TagClientError> {
        let response = self
            .client
            .get(url)
            .query(&[("concealPrivateKey", conceal_private_key)])
            .send()
            .await
            .map_err(|err| TagClientError::Transport(err.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(TagClientError::NotFound(tag_id));
        }
        response
            .error_for_status()
            .map_err(|err| TagClientError::Transport(err.to_string()))
    }
}

#[async_trait]
impl TagClient for HttpTagClient {
    async fn is_tag_exists(
        &self,
        tag_id: TagId,
        conceal_private_key: bool,
    ) -> Result<bool, TagClientError> {
        let url = format!("{}/exists", self.tag_url(tag_id));
        let response = match self.get(url, tag_id, conceal_private_key).await {
            Err(TagClientError::NotFound(_)) => return Ok(false),
            other => other?,
        };
        let body: TagExistsResponse = response
            .json()
            .await
            .map_err(|err| TagClientError::InvalidResponse(err.to_string()))?;
        Ok(body.is_exists)
    }

    async fn get_tag(
        &self,
        tag_id: TagId,
        conceal_private_key: bool,
    ) -> Result<serde_json::Value, TagClientError> {
        let response = self
            .get(self.tag_url(tag_id), tag_id, conceal_private_key)
            .await?;
        response
            .json()
            .await
            .map_err(|err| TagClientError::InvalidResponse(err.to_string()))
    }
}
