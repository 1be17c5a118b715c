use serde::{Deserialize, Serialize};

/// Text-generation request for the Inference API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HfGenerationRequest {
    pub inputs: String,
    pub parameters: HfParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HfParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_new_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Only return the continuation, not the prompt
    pub return_full_text: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HfGeneration {
    #[serde(default)]
    pub generated_text: Option<String>,
}

/// The API answers with a list of generations; any other shape yields no text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HfGenerationResponse {
    Batch(Vec<HfGeneration>),
    Other(serde_json::Value),
}

impl HfGenerationResponse {
    /// Text of the first generation, or the empty string
    pub fn first_text(&self) -> String {
        match self {
            Self::Batch(items) => items
                .first()
                .and_then(|g| g.generated_text.clone())
                .unwrap_or_default(),
            Self::Other(_) => String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HfErrorResponse {
    pub error: String,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}
