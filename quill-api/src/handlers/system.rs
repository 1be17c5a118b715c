use super::internal_error;
use crate::helpers::completion::CompletionService;
use crate::storage::{Database, DocumentFilter};
use actix_web::{delete, get, web, HttpResponse, Responder};
use chrono::Utc;
use quill_types::{ExportResponse, HealthResponse, StatsResponse};
use tracing::{info, warn};

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}

#[get("/stats")]
pub async fn stats(
    db: web::Data<Database>,
    completions: web::Data<CompletionService>,
) -> impl Responder {
    let total_documents = match db.count_documents() {
        Ok(count) => count,
        Err(e) => return internal_error("Failed to count documents", e),
    };
    let total_folders = match db.count_folders() {
        Ok(count) => count,
        Err(e) => return internal_error("Failed to count folders", e),
    };

    HttpResponse::Ok().json(StatsResponse {
        total_documents,
        total_folders,
        ai_completions: completions.completions_served(),
    })
}

fn collect_export(db: &Database) -> anyhow::Result<ExportResponse> {
    Ok(ExportResponse {
        documents: db.list_documents(&DocumentFilter::default())?,
        folders: db.list_folders()?,
        templates: db.list_custom_templates()?,
        settings: db.load_settings()?,
        exported_at: Utc::now(),
    })
}

/// Everything stored, for backup. Built-in templates are not included.
#[get("/export")]
pub async fn export(db: web::Data<Database>) -> impl Responder {
    match collect_export(&db) {
        Ok(export) => {
            info!(documents = export.documents.len(), "Exported data");
            HttpResponse::Ok().json(export)
        }
        Err(e) => internal_error("Failed to export data", e),
    }
}

/// Wipe all stored data. Built-in templates remain available.
#[delete("/data")]
pub async fn clear_data(db: web::Data<Database>) -> impl Responder {
    match db.clear_all() {
        Ok(()) => {
            warn!("Cleared all stored data");
            HttpResponse::NoContent().finish()
        }
        Err(e) => internal_error("Failed to clear data", e),
    }
}
