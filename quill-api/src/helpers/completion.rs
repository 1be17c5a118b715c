use quill_llm::fallback::FallbackChain;
use quill_llm::types::CompletionRequest;
use quill_llm::LlmError;
use quill_types::ProviderInfo;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

/// Provider name reported for the canned reply
pub const FALLBACK_PROVIDER: &str = "fallback";

pub const DEFAULT_MODEL: &str = "llama3";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Number of prompt characters quoted back in the canned reply
const PROMPT_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl CompletionOptions {
    /// Options from optional request fields. A zero or absent token budget
    /// and an empty model fall back to the defaults.
    pub fn from_request(
        model: Option<String>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            model: model.filter(|m| !m.is_empty()).unwrap_or(defaults.model),
            max_tokens: max_tokens.filter(|t| *t > 0).unwrap_or(defaults.max_tokens),
            temperature: temperature.unwrap_or(defaults.temperature),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOutcome {
    pub text: String,
    /// Provider that answered, or `fallback` for the canned reply
    pub provider: String,
}

/// Runs prompts through the provider chain. Never fails: when every
/// provider is unavailable the caller gets setup instructions instead.
pub struct CompletionService {
    chain: FallbackChain,
    providers: Vec<ProviderInfo>,
    completions: AtomicU64,
}

impl CompletionService {
    pub fn new(chain: FallbackChain, providers: Vec<ProviderInfo>) -> Self {
        Self {
            chain,
            providers,
            completions: AtomicU64::new(0),
        }
    }

    pub async fn complete_text(&self, prompt: &str, options: &CompletionOptions) -> CompletionOutcome {
        let request = CompletionRequest::prompt(prompt, options.model.clone(), options.max_tokens)
            .with_temperature(options.temperature);

        let outcome = match self.chain.complete(request).await {
            Ok(result) => {
                info!(
                    provider = %result.provider,
                    skipped = result.failures.len(),
                    output_tokens = result.response.usage.output_tokens,
                    "Completion served"
                );
                CompletionOutcome {
                    text: result.response.text(),
                    provider: result.provider,
                }
            }
            Err(e) => {
                if !matches!(e, LlmError::Exhausted { .. }) {
                    warn!(error = %e, "Unexpected completion error");
                }
                warn!("All AI services unavailable, returning fallback response");
                CompletionOutcome {
                    text: fallback_response(prompt),
                    provider: FALLBACK_PROVIDER.to_string(),
                }
            }
        };

        self.completions.fetch_add(1, Ordering::Relaxed);
        outcome
    }

    pub fn completions_served(&self) -> u64 {
        self.completions.load(Ordering::Relaxed)
    }

    /// Every known provider, configured or not
    pub fn providers(&self) -> &[ProviderInfo] {
        &self.providers
    }

    pub fn chain_order(&self) -> Vec<String> {
        self.chain.provider_names()
    }
}

/// Canned reply explaining how to enable a provider.
pub fn fallback_response(prompt: &str) -> String {
    let preview: String = prompt.chars().take(PROMPT_PREVIEW_CHARS).collect();
    format!(
        r#"I understand you'd like help with: "{preview}..."

However, all AI services are currently unavailable. To enable AI features:

1. **Install Ollama** (Recommended - runs locally, free):
   - Visit: https://ollama.ai
   - Run: ollama pull llama3

2. **Or configure API keys**:
   - Groq: Get a free API key at https://console.groq.com
   - Hugging Face: Get a free token at https://huggingface.co/settings/tokens

Configure these in your api.toml or environment:
- OLLAMA_URL=http://localhost:11434
- GROQ_API_KEY=your-groq-key
- HUGGING_FACE_TOKEN=your-hf-token

Once configured, AI features will work without any usage limits!"#
    )
}
