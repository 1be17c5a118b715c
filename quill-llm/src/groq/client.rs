use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::{
    error::{retry_after, LlmError},
    groq::types::{
        GroqChatCompletionRequest, GroqChatCompletionResponse, GroqErrorResponse, GroqMessage,
    },
    models, providers,
    types::{CompletionRequest, CompletionResponse, Role, Usage},
};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai";

/// System prompt sent when the request carries none
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI writing assistant.";

/// Groq hosted inference client
pub struct GroqClient {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl GroqClient {
    /// Create a new Groq client with the given API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::authentication("API key cannot be empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| LlmError::Network { source: e })?;

        Ok(Self {
            api_key,
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

    /// Create a chat completion using the OpenAI-compatible endpoint
    pub async fn create_chat_completion(
        &self,
        request: GroqChatCompletionRequest,
    ) -> Result<GroqChatCompletionResponse, LlmError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|_| LlmError::authentication("Invalid API key format"))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        tracing::debug!(model = %request.model, "Sending Groq chat completion request");

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
            let groq_response: GroqChatCompletionResponse = serde_json::from_str(&body)?;
            Ok(groq_response)
        } else {
            let retry = retry_after(&response);
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            // Fall back to the raw body for non-standard error responses
            let message = serde_json::from_str::<GroqErrorResponse>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);

            Err(LlmError::from_status(status, message, retry))
        }
    }
}

#[async_trait]
impl crate::client::LlmClient for GroqClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let system = request
            .system
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

        let mut messages = vec![GroqMessage::system(system)];
        messages.extend(request.messages.iter().map(|msg| match msg.role {
            Role::User => GroqMessage::user(msg.text_content()),
            Role::Assistant => GroqMessage::assistant(msg.text_content()),
            Role::System => GroqMessage::system(msg.text_content()),
        }));

        let model =
            models::resolve(providers::GROQ, &request.model).unwrap_or(models::groq::DEFAULT_MODEL);

        let groq_request = GroqChatCompletionRequest {
            model: model.to_string(),
            messages,
            max_tokens: (request.max_tokens > 0).then_some(request.max_tokens),
            temperature: request.temperature,
        };

        let groq_response = self.create_chat_completion(groq_request).await?;

        let choice = groq_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::internal("No choices in Groq response"))?;

        let usage = groq_response
            .usage
            .map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse::from_text(
            choice.message.content,
            usage,
            choice.finish_reason,
        ))
    }

    fn provider_name(&self) -> &str {
        providers::GROQ
    }

    fn model_name(&self) -> &str {
        models::groq::DEFAULT_MODEL
    }
}
