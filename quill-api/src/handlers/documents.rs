use super::{bad_request, internal_error, not_found_error};
use crate::helpers::export::{export_filename, ExportFormat};
use crate::storage::{Database, DocumentFilter};
use actix_web::http::header::ContentDisposition;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use quill_types::{CreateDocumentRequest, Document, UpdateDocumentRequest};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentListQuery {
    pub q: Option<String>,
    pub folder_id: Option<String>,
    pub limit: Option<u32>,
}

impl From<DocumentListQuery> for DocumentFilter {
    fn from(query: DocumentListQuery) -> Self {
        DocumentFilter {
            query: query.q.filter(|q| !q.is_empty()),
            folder_id: query.folder_id.filter(|f| !f.is_empty()),
            limit: query.limit,
        }
    }
}

#[get("/documents")]
pub async fn list_documents(
    query: web::Query<DocumentListQuery>,
    db: web::Data<Database>,
) -> impl Responder {
    let filter = DocumentFilter::from(query.into_inner());

    match db.list_documents(&filter) {
        Ok(documents) => HttpResponse::Ok().json(documents),
        Err(e) => internal_error("Failed to list documents", e),
    }
}

#[get("/documents/{id}")]
pub async fn get_document(id: web::Path<String>, db: web::Data<Database>) -> impl Responder {
    let id = id.into_inner();

    match db.get_document(&id) {
        Ok(Some(document)) => HttpResponse::Ok().json(document),
        Ok(None) => {
            warn!(document_id = %id, "Document not found");
            not_found_error("Document not found")
        }
        Err(e) => internal_error("Failed to retrieve document", e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DocumentExportQuery {
    pub format: Option<String>,
}

/// Download one document as a file attachment.
#[get("/documents/{id}/export")]
pub async fn export_document(
    id: web::Path<String>,
    query: web::Query<DocumentExportQuery>,
    db: web::Data<Database>,
) -> impl Responder {
    let id = id.into_inner();

    let format = match query.into_inner().format.filter(|f| !f.is_empty()) {
        None => ExportFormat::default(),
        Some(format) => match format.parse::<ExportFormat>() {
            Ok(format) => format,
            Err(e) => {
                warn!(document_id = %id, error = %e, "Export rejected");
                return bad_request(&e.to_string());
            }
        },
    };

    let document = match db.get_document(&id) {
        Ok(Some(document)) => document,
        Ok(None) => {
            warn!(document_id = %id, "Document not found");
            return not_found_error("Document not found");
        }
        Err(e) => return internal_error("Failed to retrieve document", e),
    };

    let filename = export_filename(&document.title, format);
    info!(document_id = %id, %format, "Exported document");
    HttpResponse::Ok()
        .content_type(format.content_type())
        .insert_header(ContentDisposition::attachment(filename))
        .body(format.render(&document.content))
}

#[post("/documents")]
pub async fn create_document(
    request: web::Json<CreateDocumentRequest>,
    db: web::Data<Database>,
) -> impl Responder {
    let request = request.into_inner();
    let document = Document::new(request.title, request.content, request.folder_id);

    if let Err(e) = db.insert_document(&document) {
        return internal_error("Failed to create document", e);
    }

    info!(document_id = %document.id, title = %document.title, "Created document");
    HttpResponse::Created().json(document)
}

#[put("/documents/{id}")]
pub async fn update_document(
    id: web::Path<String>,
    request: web::Json<UpdateDocumentRequest>,
    db: web::Data<Database>,
) -> impl Responder {
    let id = id.into_inner();

    match db.update_document(&id, request.into_inner()) {
        Ok(Some(document)) => {
            info!(document_id = %id, "Updated document");
            HttpResponse::Ok().json(document)
        }
        Ok(None) => {
            warn!(document_id = %id, "Document not found");
            not_found_error("Document not found")
        }
        Err(e) => internal_error("Failed to update document", e),
    }
}

#[delete("/documents/{id}")]
pub async fn delete_document(id: web::Path<String>, db: web::Data<Database>) -> impl Responder {
    let id = id.into_inner();

    match db.delete_document(&id) {
        Ok(true) => {
            info!(document_id = %id, "Deleted document");
            HttpResponse::NoContent().finish()
        }
        Ok(false) => {
            warn!(document_id = %id, "Document not found");
            not_found_error("Document not found")
        }
        Err(e) => internal_error("Failed to delete document", e),
    }
}
