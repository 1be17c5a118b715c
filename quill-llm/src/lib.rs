//! # Quill LLM
//!
//! Completion provider clients and the ordered fallback chain the quill API
//! uses for every AI request.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use quill_llm::fallback::FallbackChain;
//! use quill_llm::groq::GroqClient;
//! use quill_llm::ollama::OllamaClient;
//! use quill_llm::types::CompletionRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let chain = FallbackChain::new()
//!         .with_provider(Arc::new(OllamaClient::new()?))
//!         .with_provider(Arc::new(GroqClient::new("your-groq-key")?));
//!
//!     let request = CompletionRequest::prompt("Hello!", "llama3", 256).with_temperature(0.7);
//!     let result = chain.complete(request).await?;
//!
//!     println!("{} answered: {}", result.provider, result.response.text());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod fallback;
pub mod groq;
pub mod huggingface;
pub mod models;
pub mod ollama;
pub mod providers;
pub mod types;

pub use client::LlmClient;
pub use error::{LlmError, ProviderFailure};
pub use fallback::{ChainCompletion, FallbackChain};
