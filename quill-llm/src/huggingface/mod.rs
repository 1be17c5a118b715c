pub mod client;
pub mod types;

pub use client::HuggingFaceClient;
pub use types::*;

// Re-export Hugging Face model constants
pub use crate::models::huggingface::*;
