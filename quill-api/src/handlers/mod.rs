pub mod ai;
pub mod auth;
pub mod documents;
pub mod folders;
pub mod settings;
pub mod system;
pub mod templates;

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use quill_types::ErrorResponse;
use std::fmt::Display;
use tracing::{error, warn};

/// Body returned for any unexpected failure; the cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

/// Register every route under `/api`, with JSON error bodies for malformed
/// requests and unknown paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api")
                .service(system::health)
                .service(system::stats)
                .service(system::export)
                .service(system::clear_data)
                .service(ai::complete)
                .service(ai::suggest)
                .service(ai::generate)
                .service(ai::list_providers)
                .service(documents::list_documents)
                .service(documents::get_document)
                .service(documents::export_document)
                .service(documents::create_document)
                .service(documents::update_document)
                .service(documents::delete_document)
                .service(folders::list_folders)
                .service(folders::create_folder)
                .service(folders::delete_folder)
                .service(templates::list_templates)
                .service(templates::create_template)
                .service(templates::use_template)
                .service(templates::delete_template)
                .service(settings::get_settings)
                .service(settings::update_settings)
                .service(auth::current_user)
                .service(auth::logout)
                .default_service(web::to(not_found)),
        );
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), error = %err, "Rejected request body");
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), error = %err, "Rejected query string");
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

async fn not_found(req: HttpRequest) -> HttpResponse {
    warn!(method = %req.method(), path = %req.path(), "No route matched");
    HttpResponse::NotFound().json(ErrorResponse::new("Not found"))
}

/// Log the cause and answer with the generic 500 body.
pub(crate) fn internal_error(context: &str, err: impl Display) -> HttpResponse {
    error!(error = %err, "{}", context);
    HttpResponse::InternalServerError().json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE))
}

pub(crate) fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(message))
}

pub(crate) fn not_found_error(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(message))
}
