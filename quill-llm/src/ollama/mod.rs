pub mod client;
pub mod types;

pub use client::OllamaClient;
pub use types::*;

// Re-export Ollama model constants
pub use crate::models::ollama::*;
