use super::bad_request;
use crate::helpers::completion::{CompletionOptions, CompletionService, DEFAULT_MODEL};
use crate::helpers::prompts::{self, GenerateKind};
use crate::storage::Database;
use actix_web::{get, post, web, HttpResponse, Responder};
use quill_types::{
    CompleteRequest, GenerateRequest, GenerateResponse, ProvidersResponse, SuggestRequest,
    SuggestResponse,
};
use tracing::{info, warn};

/// Response header naming the provider that produced a completion
pub const PROVIDER_HEADER: &str = "x-completion-provider";

#[post("/ai/complete")]
pub async fn complete(
    request: web::Json<CompleteRequest>,
    db: web::Data<Database>,
    completions: web::Data<CompletionService>,
) -> impl Responder {
    let request = request.into_inner();

    let Some(prompt) = request.prompt.filter(|p| !p.is_empty()) else {
        warn!("Completion rejected: missing prompt");
        return bad_request("Prompt is required");
    };

    // No model in the request means the user's preferred one
    let model = match request.model.filter(|m| !m.is_empty()) {
        Some(model) => model,
        None => match db.load_settings() {
            Ok(settings) => settings.ai_model,
            Err(e) => {
                warn!(error = %e, "Failed to load settings, using default model");
                DEFAULT_MODEL.to_string()
            }
        },
    };

    let options =
        CompletionOptions::from_request(Some(model), request.max_tokens, request.temperature);
    info!(
        model = %options.model,
        max_tokens = options.max_tokens,
        prompt_chars = prompt.chars().count(),
        "Completing text"
    );

    let outcome = completions.complete_text(&prompt, &options).await;

    HttpResponse::Ok()
        .insert_header((PROVIDER_HEADER, outcome.provider))
        .json(outcome.text)
}

#[post("/ai/suggest")]
pub async fn suggest(
    request: web::Json<SuggestRequest>,
    completions: web::Data<CompletionService>,
) -> impl Responder {
    let request = request.into_inner();

    let Some(text) = request.text.filter(|t| !t.is_empty()) else {
        warn!("Suggestion rejected: missing text");
        return bad_request("Text is required");
    };

    let prompt = prompts::suggest_prompt(&text, request.context.as_deref());
    let options = CompletionOptions {
        model: DEFAULT_MODEL.to_string(),
        max_tokens: prompts::SUGGEST_MAX_TOKENS,
        temperature: prompts::SUGGEST_TEMPERATURE,
    };
    let outcome = completions.complete_text(&prompt, &options).await;

    HttpResponse::Ok().json(SuggestResponse {
        suggestions: outcome.text,
    })
}

#[post("/ai/generate")]
pub async fn generate(
    request: web::Json<GenerateRequest>,
    completions: web::Data<CompletionService>,
) -> impl Responder {
    let request = request.into_inner();

    let Some(kind_name) = request.kind.as_deref().filter(|k| !k.is_empty()) else {
        warn!("Generation rejected: missing type");
        return bad_request("Type is required");
    };
    let Some(kind) = GenerateKind::parse(kind_name) else {
        warn!(kind = %kind_name, "Generation rejected: unknown type");
        return bad_request("Invalid type");
    };

    info!(kind = %kind_name, "Generating content");
    let prompt = kind.prompt(&request);
    let options = CompletionOptions::from_request(None, request.max_tokens, None);
    let outcome = completions.complete_text(&prompt, &options).await;

    HttpResponse::Ok().json(GenerateResponse {
        content: outcome.text,
    })
}

#[get("/ai/providers")]
pub async fn list_providers(completions: web::Data<CompletionService>) -> impl Responder {
    HttpResponse::Ok().json(ProvidersResponse {
        providers: completions.providers().to_vec(),
    })
}
