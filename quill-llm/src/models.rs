//! Model alias tables for supported providers
//!
//! Requests carry a short alias (`llama3`, `mistral`, ...). Each provider
//! maps the alias to one of its own model ids and falls back to its default
//! model for aliases it does not know.

use crate::providers;

/// Ollama model constants
pub mod ollama {
    pub const LLAMA3_ID: &str = "llama3";
    pub const MISTRAL_ID: &str = "mistral";
    pub const CODELLAMA_ID: &str = "codellama";

    pub const DEFAULT_MODEL: &str = LLAMA3_ID;

    pub const ALIASES: &[(&str, &str)] = &[
        ("llama3", LLAMA3_ID),
        ("mistral", MISTRAL_ID),
        ("codellama", CODELLAMA_ID),
    ];
}

/// Groq model constants
pub mod groq {
    /// Llama 3 8B, 8k context
    pub const LLAMA3_8B_ID: &str = "llama3-8b-8192";
    /// Mixtral 8x7B, 32k context
    pub const MIXTRAL_8X7B_ID: &str = "mixtral-8x7b-32768";

    pub const DEFAULT_MODEL: &str = LLAMA3_8B_ID;

    pub const ALIASES: &[(&str, &str)] = &[("llama", LLAMA3_8B_ID), ("mixtral", MIXTRAL_8X7B_ID)];
}

/// Hugging Face model constants
pub mod huggingface {
    pub const LLAMA2_7B_CHAT_ID: &str = "meta-llama/Llama-2-7b-chat-hf";
    pub const MISTRAL_7B_INSTRUCT_ID: &str = "mistralai/Mistral-7B-Instruct-v0.1";

    pub const DEFAULT_MODEL: &str = MISTRAL_7B_INSTRUCT_ID;

    pub const ALIASES: &[(&str, &str)] = &[
        ("llama", LLAMA2_7B_CHAT_ID),
        ("mistral", MISTRAL_7B_INSTRUCT_ID),
    ];
}

/// Alias table for a provider; empty for unknown providers.
pub fn aliases(provider: &str) -> &'static [(&'static str, &'static str)] {
    match provider {
        providers::OLLAMA => ollama::ALIASES,
        providers::GROQ => groq::ALIASES,
        providers::HUGGINGFACE => huggingface::ALIASES,
        _ => &[],
    }
}

/// Default model id for a provider.
pub fn default_model(provider: &str) -> Option<&'static str> {
    match provider {
        providers::OLLAMA => Some(ollama::DEFAULT_MODEL),
        providers::GROQ => Some(groq::DEFAULT_MODEL),
        providers::HUGGINGFACE => Some(huggingface::DEFAULT_MODEL),
        _ => None,
    }
}

/// Resolve an alias to a provider model id.
pub fn resolve(provider: &str, alias: &str) -> Option<&'static str> {
    aliases(provider)
        .iter()
        .find(|(name, _)| *name == alias)
        .map(|(_, id)| *id)
        .or_else(|| default_model(provider))
}
