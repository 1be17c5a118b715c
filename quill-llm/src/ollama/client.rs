use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::{
    error::{retry_after, LlmError},
    models,
    ollama::types::{
        OllamaErrorResponse, OllamaGenerateRequest, OllamaGenerateResponse, OllamaOptions,
    },
    providers,
    types::{CompletionRequest, CompletionResponse, Role, Usage},
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Ollama local completion client
pub struct OllamaClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl OllamaClient {
    /// Create a new Ollama client with default base URL
    pub fn new() -> Result<Self, LlmError> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .build()
            .map_err(|e| LlmError::Network { source: e })?;

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client,
        })
    }

    /// Set a custom base URL for the API
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate a completion using the Ollama /api/generate endpoint
    pub async fn generate(
        &self,
        request: OllamaGenerateRequest,
    ) -> Result<OllamaGenerateResponse, LlmError> {
        let url = format!("{}/api/generate", self.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        tracing::debug!(model = %request.model, url = %url, "Sending Ollama generate request");

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Network { source: e })?;

        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| LlmError::Network { source: e })?;
            let ollama_response: OllamaGenerateResponse = serde_json::from_str(&body)?;
            Ok(ollama_response)
        } else {
            let retry = retry_after(&response);
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            let message = serde_json::from_str::<OllamaErrorResponse>(&error_text)
                .map(|e| e.error)
                .unwrap_or(error_text);

            Err(LlmError::from_status(status, message, retry))
        }
    }
}

#[async_trait]
impl crate::client::LlmClient for OllamaClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        // /api/generate takes a single prompt, so conversation turns are flattened
        let mut system = request.system;
        let mut turns = Vec::new();
        for message in &request.messages {
            match message.role {
                Role::System => system = Some(message.text_content()),
                Role::User | Role::Assistant => turns.push(message.text_content()),
            }
        }

        let options = OllamaOptions {
            temperature: request.temperature,
            num_predict: (request.max_tokens > 0).then_some(request.max_tokens),
        };

        let model = models::resolve(providers::OLLAMA, &request.model)
            .unwrap_or(models::ollama::DEFAULT_MODEL);

        let ollama_request = OllamaGenerateRequest {
            model: model.to_string(),
            prompt: turns.join("\n\n"),
            system,
            options: if options.is_empty() {
                None
            } else {
                Some(options)
            },
            stream: Some(false),
        };

        let ollama_response = self.generate(ollama_request).await?;

        let usage = Usage {
            input_tokens: ollama_response.prompt_eval_count.unwrap_or(0),
            output_tokens: ollama_response.eval_count.unwrap_or(0),
        };

        Ok(CompletionResponse::from_text(
            ollama_response.response,
            usage,
            ollama_response.done_reason,
        ))
    }

    fn provider_name(&self) -> &str {
        providers::OLLAMA
    }

    fn model_name(&self) -> &str {
        models::ollama::DEFAULT_MODEL
    }
}
