use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::{
    error::{retry_after, LlmError},
    huggingface::types::{
        HfErrorResponse, HfGenerationRequest, HfGenerationResponse, HfParameters,
    },
    models, providers,
    types::{CompletionRequest, CompletionResponse, Usage},
};

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Hugging Face Inference API client
pub struct HuggingFaceClient {
    token: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl HuggingFaceClient {
    /// Create a new client with an access token
    pub fn new(token: impl Into<String>) -> Result<Self, LlmError> {
        let token = token.into();
        if token.is_empty() {
            return Err(LlmError::authentication("Access token cannot be empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| LlmError::Network { source: e })?;

        Ok(Self {
            token,
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

    /// Run text generation against `{base}/models/{model}`
    pub async fn generate(
        &self,
        model: &str,
        request: HfGenerationRequest,
    ) -> Result<HfGenerationResponse, LlmError> {
        let url = format!("{}/models/{}", self.base_url, model);

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token))
                .map_err(|_| LlmError::authentication("Invalid access token format"))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        tracing::debug!(model = %model, "Sending Hugging Face generation request");

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
            let hf_response: HfGenerationResponse = serde_json::from_str(&body)?;
            Ok(hf_response)
        } else {
            let retry = retry_after(&response);
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            let message = serde_json::from_str::<HfErrorResponse>(&error_text)
                .map(|e| e.error)
                .unwrap_or(error_text);

            Err(LlmError::from_status(status, message, retry))
        }
    }
}

#[async_trait]
impl crate::client::LlmClient for HuggingFaceClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let mut sections: Vec<String> = request.system.into_iter().collect();
        sections.extend(request.messages.iter().map(|m| m.text_content()));

        let model = models::resolve(providers::HUGGINGFACE, &request.model)
            .unwrap_or(models::huggingface::DEFAULT_MODEL);

        let hf_request = HfGenerationRequest {
            inputs: sections.join("\n\n"),
            parameters: HfParameters {
                max_new_tokens: (request.max_tokens > 0).then_some(request.max_tokens),
                temperature: request.temperature,
                return_full_text: false,
            },
        };

        let hf_response = self.generate(model, hf_request).await?;

        Ok(CompletionResponse::from_text(
            hf_response.first_text(),
            Usage::default(),
            None,
        ))
    }

    fn provider_name(&self) -> &str {
        providers::HUGGINGFACE
    }

    fn model_name(&self) -> &str {
        models::huggingface::DEFAULT_MODEL
    }
}
