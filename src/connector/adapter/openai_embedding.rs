use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::EmbeddingService;
use crate::domain::{DomainError, Embedding};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const EMBEDDINGS_PATH: &str = "/v1/embeddings";
const DEFAULT_MODEL: &str = "text-embedding-ada-002";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    data: Vec<EmbeddingObject>,
}

#[derive(Deserialize)]
struct EmbeddingObject {
    embedding: Vec<f32>,
}

/// HTTP client for the OpenAI embeddings API (and compatible endpoints).
///
/// Implements [`EmbeddingService`] so the comparison flow stays decoupled
/// from transport and serialization details.
///
/// Configuration comes from explicit constructor arguments; [`Self::from_env`]
/// reads them from the process environment once, in the wiring layer:
///
/// ```text
/// OPENAI_API_KEY=sk-...
/// OPENAI_BASE_URL=https://api.openai.com
/// OPENAI_EMBEDDING_MODEL=text-embedding-ada-002
/// ```
pub struct OpenAiEmbedding {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + EMBEDDINGS_PATH).
    url: String,
}

impl OpenAiEmbedding {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{EMBEDDINGS_PATH}", base.trim_end_matches('/'));
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    /// Construct from environment variables.
    ///
    /// | Variable                 | Default                    | Purpose              |
    /// |--------------------------|----------------------------|----------------------|
    /// | `OPENAI_API_KEY`         | (required)                 | Provider credential  |
    /// | `OPENAI_BASE_URL`        | `https://api.openai.com`   | Any compatible server|
    /// | `OPENAI_EMBEDDING_MODEL` | `text-embedding-ada-002`   | Embedding model      |
    pub fn from_env() -> Result<Self, DomainError> {
        let key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| DomainError::config("OPENAI_API_KEY must be set"))?;
        let base =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("OPENAI_EMBEDDING_MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(key, model, base))
    }

    /// Pull a human-readable message out of a provider error body.
    ///
    /// The API reports failures as `{"error": {"message": ...}}`; anything
    /// else falls back to the raw body.
    fn extract_error_message(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")?
                    .get("message")?
                    .as_str()
                    .map(ToString::to_string)
            })
            .unwrap_or_else(|| body.to_string())
    }
}

#[async_trait]
impl EmbeddingService for OpenAiEmbedding {
    async fn embed(&self, text: &str) -> Result<Embedding, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            input: text,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::provider(format!("OpenAiEmbedding: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = Self::extract_error_message(&body);
            warn!("OpenAiEmbedding: API returned {status}: {message}");
            return Err(DomainError::provider(format!(
                "OpenAiEmbedding: API returned {status}: {message}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::provider(format!("OpenAiEmbedding: failed to parse response: {e}"))
        })?;

        let vector = api_response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| DomainError::provider("OpenAiEmbedding: response contained no embeddings"))?;

        debug!(
            "Fetched embedding with {} dimensions from {}",
            vector.len(),
            self.model
        );

        Ok(Embedding::new(vector, self.model.clone()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let service = OpenAiEmbedding::new("key", "model", "https://api.openai.com/");

        assert_eq!(service.url, "https://api.openai.com/v1/embeddings");
    }

    #[test]
    fn test_error_message_extracted_from_api_body() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;

        assert_eq!(
            OpenAiEmbedding::extract_error_message(body),
            "Incorrect API key provided"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(
            OpenAiEmbedding::extract_error_message("upstream timeout"),
            "upstream timeout"
        );
    }
}
