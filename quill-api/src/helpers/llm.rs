use crate::config::ProvidersConfig;
use crate::helpers::completion::CompletionService;
use quill_llm::fallback::FallbackChain;
use quill_llm::groq::GroqClient;
use quill_llm::huggingface::HuggingFaceClient;
use quill_llm::ollama::OllamaClient;
use quill_llm::{models, providers};
use quill_types::{ModelAlias, ProviderInfo};
use std::sync::Arc;
use tracing::{info, warn};

/// Show the first six characters of a key, masking the rest.
pub fn mask_api_key(key: &Option<String>) -> Option<String> {
    key.as_ref().map(|k| {
        let visible: String = k.chars().take(6).collect();
        let hidden = k.chars().count().saturating_sub(6);
        if hidden == 0 {
            visible
        } else {
            let masked = format!("{}{}", visible, "*".repeat(hidden));
            if masked.len() > 40 {
                format!("{}...", &masked[..37])
            } else {
                masked
            }
        }
    })
}

fn model_aliases(provider: &str) -> Vec<ModelAlias> {
    models::aliases(provider)
        .iter()
        .map(|(alias, id)| ModelAlias {
            alias: alias.to_string(),
            model_id: id.to_string(),
        })
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}

/// Build the provider chain in priority order: Ollama, Groq, Hugging Face.
/// Hosted providers without credentials are left out with a warning.
pub fn build_completion_service(config: &ProvidersConfig) -> anyhow::Result<CompletionService> {
    let mut chain = FallbackChain::new();
    let mut catalog = Vec::new();

    // Ollama (local, no limits)
    let ollama_enabled = config.ollama_enabled.unwrap_or(true);
    let mut ollama = OllamaClient::new()?;
    if let Some(url) = non_empty(&config.ollama_url) {
        ollama = ollama.with_base_url(url);
    }
    let ollama_endpoint = ollama.base_url().to_string();
    if ollama_enabled {
        chain.push(Arc::new(ollama));
    } else {
        info!("Ollama disabled in configuration");
    }
    catalog.push(ProviderInfo {
        name: providers::OLLAMA.to_string(),
        priority: ollama_enabled.then_some(chain.len() as u32),
        configured: ollama_enabled,
        endpoint: ollama_endpoint,
        key: None,
        models: model_aliases(providers::OLLAMA),
    });

    // Groq (free tier)
    let groq_key = non_empty(&config.groq_api_key);
    let groq_endpoint = non_empty(&config.groq_base_url)
        .unwrap_or_else(|| quill_llm::groq::client::DEFAULT_BASE_URL.to_string());
    match &groq_key {
        Some(key) => {
            chain.push(Arc::new(
                GroqClient::new(key.clone())?.with_base_url(groq_endpoint.clone()),
            ));
        }
        None => warn!("Groq API key not configured, skipping provider"),
    }
    catalog.push(ProviderInfo {
        name: providers::GROQ.to_string(),
        priority: groq_key.is_some().then_some(chain.len() as u32),
        configured: groq_key.is_some(),
        endpoint: groq_endpoint,
        key: mask_api_key(&groq_key),
        models: model_aliases(providers::GROQ),
    });

    // Hugging Face (free tier)
    let hf_token = non_empty(&config.huggingface_token);
    let hf_endpoint = non_empty(&config.huggingface_base_url)
        .unwrap_or_else(|| quill_llm::huggingface::client::DEFAULT_BASE_URL.to_string());
    match &hf_token {
        Some(token) => {
            chain.push(Arc::new(
                HuggingFaceClient::new(token.clone())?.with_base_url(hf_endpoint.clone()),
            ));
        }
        None => warn!("Hugging Face token not configured, skipping provider"),
    }
    catalog.push(ProviderInfo {
        name: providers::HUGGINGFACE.to_string(),
        priority: hf_token.is_some().then_some(chain.len() as u32),
        configured: hf_token.is_some(),
        endpoint: hf_endpoint,
        key: mask_api_key(&hf_token),
        models: model_aliases(providers::HUGGINGFACE),
    });

    info!(chain = ?chain.provider_names(), "Completion provider chain ready");

    Ok(CompletionService::new(chain, catalog))
}
