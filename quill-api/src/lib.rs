pub mod cli;
pub mod config;
pub mod handlers;
pub mod helpers;
pub mod logging;
pub mod storage;

pub use helpers::completion::CompletionService;
pub use storage::Database;
