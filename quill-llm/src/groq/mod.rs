pub mod client;
pub mod types;

pub use client::GroqClient;
pub use types::*;

// Re-export Groq model constants
pub use crate::models::groq::*;
