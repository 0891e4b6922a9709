//! Ollama generate client

use crate::api::{endpoints, GenerateRequest, GenerateResponse};
use crate::error::Result;
use reqwest::Client;
use tracing::debug;

/// Sends one-shot, non-streamed completions to an Ollama server
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
        })
    }

    /// Send a prompt and return the raw completion text.
    ///
    /// A reply without a `response` field yields an empty string.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = endpoints::ollama_generate_url(&self.base_url);
        debug!(%url, model = %self.model, prompt_len = prompt.len(), "POST generate");

        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let reply: GenerateResponse = response.json().await?;

        Ok(reply.response)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_generate_sends_non_streamed_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_json(json!({
                "model": "llama3",
                "prompt": "Describe TP53",
                "stream": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model": "llama3",
                "response": "{\"gene\": \"TP53\"}",
                "done": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OllamaClient::new(server.uri(), "llama3").unwrap();
        let text = client.generate("Describe TP53").await.unwrap();
        assert_eq!(text, "{\"gene\": \"TP53\"}");
    }

    #[tokio::test]
    async fn test_generate_missing_response_field_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"done": true})))
            .mount(&server)
            .await;

        let client = OllamaClient::new(server.uri(), "llama3").unwrap();
        assert_eq!(client.generate("hi").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_generate_propagates_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = OllamaClient::new(server.uri(), "llama3").unwrap();
        assert!(client.generate("hi").await.is_err());
    }
}
