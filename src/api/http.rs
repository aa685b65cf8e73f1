//! HTTP Todo API
//!
//! `reqwest` binding for the todo backend. Request bodies are URL-encoded
//! forms, responses are JSON.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::{ApiError, ApiResult, TodoApi};
use crate::config::ApiConfig;
use crate::models::{EntityEnvelope, ErrorBody, Item, RowId, TaskFields};

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    config: ApiConfig,
}

impl HttpTodoApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

impl Default for HttpTodoApi {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

/// Turn a non-success status into [`ApiError::Status`]
async fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Backend errors are `{"message": ...}`; fall back to the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ApiResult<Vec<Item>> {
        let response = self.client.get(self.config.collection_url()).send().await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    async fn create(&self, candidate: &TaskFields) -> ApiResult<Item> {
        let response = self
            .client
            .post(self.config.collection_url())
            .form(candidate)
            .send()
            .await?;
        let envelope: EntityEnvelope<Item> = ensure_success(response).await?.json().await?;
        Ok(envelope.entity)
    }

    async fn update(&self, rowid: RowId, desired: &TaskFields) -> ApiResult<TaskFields> {
        let response = self
            .client
            .put(self.config.entity_url(rowid))
            .form(desired)
            .send()
            .await?;
        let envelope: EntityEnvelope<TaskFields> = ensure_success(response).await?.json().await?;
        Ok(envelope.entity)
    }

    async fn delete(&self, rowid: RowId) -> ApiResult<()> {
        let response = self.client.delete(self.config.entity_url(rowid)).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_json_body() {
        let body = r#"{"message":"Could not find a todo with ID '9'."}"#;
        assert_eq!(error_message(body), "Could not find a todo with ID '9'.");
    }

    #[test]
    fn test_error_message_from_plain_body() {
        assert_eq!(error_message("Not Found\n"), "Not Found");
    }

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status { status: 400, message: "bad".into() };
        assert_eq!(err.to_string(), "server returned 400: bad");
    }
}
