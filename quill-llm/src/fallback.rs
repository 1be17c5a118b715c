//! Ordered provider fallback.
//!
//! Providers are stored in priority order (index 0 = highest). A request is
//! sent to each provider in turn until one succeeds. There is no retry,
//! backoff or fan-out: a failed provider is logged and skipped.
//!
//! ```text
//! request ──► ollama ──err──► groq ──err──► huggingface ──err──► Exhausted
//!               │ok             │ok              │ok
//!               ▼               ▼                ▼
//!          ChainCompletion { provider, response, failures }
//! ```

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    client::LlmClient,
    error::{LlmError, ProviderFailure},
    types::{CompletionRequest, CompletionResponse},
};

/// Result of a successful chain run
#[derive(Debug, Clone)]
pub struct ChainCompletion {
    /// Provider that produced the response
    pub provider: String,
    pub response: CompletionResponse,
    /// Providers tried (and failed) before the winning one
    pub failures: Vec<ProviderFailure>,
}

#[derive(Default, Clone)]
pub struct FallbackChain {
    providers: Vec<Arc<dyn LlmClient>>,
}

impl FallbackChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider (lowest priority so far)
    pub fn push(&mut self, provider: Arc<dyn LlmClient>) {
        self.providers.push(provider);
    }

    pub fn with_provider(mut self, provider: Arc<dyn LlmClient>) -> Self {
        self.push(provider);
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Provider names in priority order
    pub fn provider_names(&self) -> Vec<String> {
        self.providers
            .iter()
            .map(|p| p.provider_name().to_string())
            .collect()
    }

    /// Try each provider in order; the first success wins.
    pub async fn complete(&self, request: CompletionRequest) -> Result<ChainCompletion, LlmError> {
        let mut failures = Vec::new();

        for provider in &self.providers {
            let name = provider.provider_name().to_string();
            debug!(provider = %name, "Trying completion provider");

            match provider.complete(request.clone()).await {
                Ok(response) => {
                    return Ok(ChainCompletion {
                        provider: name,
                        response,
                        failures,
                    });
                }
                Err(e) => {
                    warn!(provider = %name, error = %e, "Completion provider not available");
                    failures.push(ProviderFailure {
                        provider: name,
                        message: e.to_string(),
                    });
                }
            }
        }

        Err(LlmError::Exhausted { failures })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Role, Usage};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubClient {
        name: &'static str,
        reply: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl StubClient {
        fn ok(name: &'static str, reply: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                reply: Some(reply),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                reply: None,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmClient for StubClient {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Some(text) => Ok(CompletionResponse::from_text(text, Usage::default(), None)),
                None => Err(LlmError::internal(format!("{} is down", self.name))),
            }
        }

        fn provider_name(&self) -> &str {
            self.name
        }

        fn model_name(&self) -> &str {
            "stub"
        }
    }

    fn request() -> CompletionRequest {
        CompletionRequest::prompt("Write a haiku", "llama3", 100)
    }

    #[tokio::test]
    async fn test_first_provider_wins() {
        let first = StubClient::ok("first", "one");
        let second = StubClient::ok("second", "two");
        let chain = FallbackChain::new()
            .with_provider(first.clone())
            .with_provider(second.clone());

        let result = chain.complete(request()).await.unwrap();
        assert_eq!(result.provider, "first");
        assert_eq!(result.response.text(), "one");
        assert_eq!(result.response.role, Role::Assistant);
        assert!(result.failures.is_empty());
        assert_eq!(second.calls(), 0);
    }

    #[tokio::test]
    async fn test_falls_through_in_order() {
        let first = StubClient::failing("first");
        let second = StubClient::failing("second");
        let third = StubClient::ok("third", "three");
        let chain = FallbackChain::new()
            .with_provider(first.clone())
            .with_provider(second.clone())
            .with_provider(third.clone());

        let result = chain.complete(request()).await.unwrap();
        assert_eq!(result.provider, "third");
        assert_eq!(result.response.text(), "three");
        let tried: Vec<_> = result.failures.iter().map(|f| f.provider.as_str()).collect();
        assert_eq!(tried, vec!["first", "second"]);
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);
        assert_eq!(third.calls(), 1);
    }

    #[tokio::test]
    async fn test_all_failing_is_exhausted() {
        let chain = FallbackChain::new()
            .with_provider(StubClient::failing("a"))
            .with_provider(StubClient::failing("b"));

        match chain.complete(request()).await {
            Err(LlmError::Exhausted { failures }) => {
                assert_eq!(failures.len(), 2);
                assert!(failures[0].message.contains("a is down"));
            }
            other => panic!("expected Exhausted, got {:?}", other.map(|c| c.provider)),
        }
    }

    #[tokio::test]
    async fn test_empty_chain_is_exhausted() {
        let chain = FallbackChain::new();
        assert!(chain.is_empty());
        assert!(matches!(
            chain.complete(request()).await,
            Err(LlmError::Exhausted { failures }) if failures.is_empty()
        ));
    }

    #[test]
    fn test_provider_names_in_order() {
        let chain = FallbackChain::new()
            .with_provider(StubClient::ok("ollama", ""))
            .with_provider(StubClient::ok("groq", ""));
        assert_eq!(chain.provider_names(), vec!["ollama", "groq"]);
        assert_eq!(chain.len(), 2);
    }
}
