//! Provider name constants
//!
//! Canonical provider names used in logs, the fallback chain and the API

/// Ollama local provider
pub const OLLAMA: &str = "ollama";

/// Groq hosted provider (OpenAI-compatible)
pub const GROQ: &str = "groq";

/// Hugging Face Inference API
pub const HUGGINGFACE: &str = "huggingface";

/// Default chain order: local first, then the hosted free tiers
pub const DEFAULT_ORDER: [&str; 3] = [OLLAMA, GROQ, HUGGINGFACE];
