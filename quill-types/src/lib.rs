//! Wire types shared between the quill API and its web front end.
//!
//! Every type derives `ts_rs::TS` so the front end can import generated
//! TypeScript definitions (see the `generate_api_types` binary).

pub mod ai;
pub mod document;
pub mod settings;
pub mod system;
pub mod template;
pub mod typescript_gen;

pub use typescript_gen::generate_typescript_definitions;

pub use ai::{
    CompleteRequest, GenerateRequest, GenerateResponse, ModelAlias, ProviderInfo,
    ProvidersResponse, SuggestRequest, SuggestResponse,
};
pub use document::{
    CreateDocumentRequest, CreateFolderRequest, Document, Folder, UpdateDocumentRequest,
};
pub use settings::{UpdateSettingsRequest, UserSettings};
pub use system::{
    CurrentUserResponse, ErrorResponse, ExportResponse, HealthResponse, MessageResponse,
    StatsResponse, UserInfo,
};
pub use template::{CreateTemplateRequest, Template};
