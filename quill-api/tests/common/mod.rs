#![allow(dead_code)]

use actix_web::{test, web, App};
use quill_api::handlers;
use quill_api::{CompletionService, Database};
use quill_llm::client::LlmClient;
use quill_llm::error::LlmError;
use quill_llm::fallback::FallbackChain;
use quill_llm::types::{CompletionRequest, CompletionResponse, Usage};
use std::sync::{Arc, Mutex};

pub struct TestApp<S> {
    pub db: web::Data<Database>,
    pub completions: web::Data<CompletionService>,
    pub mock_llm_client: Arc<MockLlmClient>,
    pub app: S,
}

/// Records every request and answers with queued texts, or fails when
/// configured to.
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    pub fail: bool,
}

impl MockLlmClient {
    pub fn new() -> Self {
        MockLlmClient {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        MockLlmClient {
            fail: true,
            ..Self::new()
        }
    }

    pub fn push_response(&self, text: &str) {
        self.responses.lock().unwrap().push(text.to_string());
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_request()
            .and_then(|r| r.messages.first().map(|m| m.text_content()))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request);

        if self.fail {
            return Err(LlmError::api_error(503, "mock provider unavailable".to_string()));
        }

        let mut responses = self.responses.lock().unwrap();
        let text = if responses.is_empty() {
            "Mock completion".to_string()
        } else {
            responses.remove(0)
        };

        Ok(CompletionResponse::from_text(
            text,
            Usage {
                input_tokens: 10,
                output_tokens: 20,
            },
            Some("stop".to_string()),
        ))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

pub async fn setup_test_app() -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    setup_test_app_with(MockLlmClient::new()).await
}

pub async fn setup_test_app_with(
    mock: MockLlmClient,
) -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    let mock_llm_client = Arc::new(mock);
    let chain = FallbackChain::new().with_provider(mock_llm_client.clone() as Arc<dyn LlmClient>);
    build_test_app(CompletionService::new(chain, Vec::new()), mock_llm_client).await
}

/// App backed by a prebuilt completion service, e.g. one made from a
/// `ProvidersConfig`. The mock client is attached but not in the chain.
pub async fn setup_test_app_with_service(
    completions: CompletionService,
) -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    build_test_app(completions, Arc::new(MockLlmClient::new())).await
}

async fn build_test_app(
    completions: CompletionService,
    mock_llm_client: Arc<MockLlmClient>,
) -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    let db = web::Data::new(Database::in_memory()?);
    let completions = web::Data::new(completions);

    let app = test::init_service(
        App::new()
            .app_data(db.clone())
            .app_data(completions.clone())
            .configure(handlers::configure),
    )
    .await;

    Ok(TestApp {
        db,
        completions,
        mock_llm_client,
        app,
    })
}
