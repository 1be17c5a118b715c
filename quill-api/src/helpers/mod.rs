pub mod completion;
pub mod export;
pub mod llm;
pub mod prompts;
pub mod templates;
