use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============ AI writing assistance ============

/// Free-form completion. Field names follow the established wire format
/// (`max_tokens` is snake_case here, unlike the generate request).
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct CompleteRequest {
    pub prompt: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct SuggestRequest {
    pub text: Option<String>,
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct SuggestResponse {
    /// Raw model output; the prompt asks for a JSON array but the reply is
    /// not validated.
    pub suggestions: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct GenerateRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub topic: Option<String>,
    pub recipient: Option<String>,
    pub tone: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "maxTokens")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct GenerateResponse {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ModelAlias {
    pub alias: String,
    pub model_id: String,
}

/// One entry of the completion fallback chain.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ProviderInfo {
    pub name: String,
    /// Position in the chain, 1-based; `None` when the provider is not configured
    pub priority: Option<u32>,
    pub configured: bool,
    pub endpoint: String,
    pub key: Option<String>,
    pub models: Vec<ModelAlias>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ProvidersResponse {
    pub providers: Vec<ProviderInfo>,
}
