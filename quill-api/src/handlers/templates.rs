use super::{bad_request, internal_error, not_found_error};
use crate::helpers::templates::{builtin_templates, find_builtin};
use crate::storage::Database;
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use quill_types::{CreateTemplateRequest, Document, Template};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Default, Deserialize)]
pub struct TemplateListQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

/// Built-in templates first, then saved ones.
#[get("/templates")]
pub async fn list_templates(
    query: web::Query<TemplateListQuery>,
    db: web::Data<Database>,
) -> impl Responder {
    let custom = match db.list_custom_templates() {
        Ok(templates) => templates,
        Err(e) => return internal_error("Failed to list templates", e),
    };

    let search = query.q.as_deref().unwrap_or_default();
    let category = query.category.as_deref().unwrap_or_default();

    let templates: Vec<Template> = builtin_templates()
        .into_iter()
        .chain(custom)
        .filter(|t| t.matches_query(search) && t.matches_category(category))
        .collect();

    HttpResponse::Ok().json(templates)
}

#[post("/templates")]
pub async fn create_template(
    request: web::Json<CreateTemplateRequest>,
    db: web::Data<Database>,
) -> impl Responder {
    let request = request.into_inner();

    let name = request
        .name
        .map(|n| n.trim().to_string())
        .unwrap_or_default();
    if name.is_empty() {
        warn!("Template rejected: missing name");
        return bad_request("Template name is required");
    }

    let template = Template {
        id: uuid::Uuid::new_v4().to_string(),
        name,
        description: request.description.unwrap_or_default(),
        category: request
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| Template::DEFAULT_CATEGORY.to_string()),
        content: request.content.unwrap_or_default(),
        builtin: false,
        created_at: Some(chrono::Utc::now()),
    };

    if let Err(e) = db.insert_template(&template) {
        return internal_error("Failed to save template", e);
    }

    info!(template_id = %template.id, name = %template.name, "Saved template");
    HttpResponse::Created().json(template)
}

/// Start a new document from a template.
#[post("/templates/{id}/use")]
pub async fn use_template(id: web::Path<String>, db: web::Data<Database>) -> impl Responder {
    let id = id.into_inner();

    let template = match find_builtin(&id) {
        Some(template) => template,
        None => match db.get_custom_template(&id) {
            Ok(Some(template)) => template,
            Ok(None) => {
                warn!(template_id = %id, "Template not found");
                return not_found_error("Template not found");
            }
            Err(e) => return internal_error("Failed to retrieve template", e),
        },
    };

    let mut document = Document::new(
        Some(format!("New {}", template.name)),
        Some(template.content),
        None,
    );
    document.template_id = Some(template.id);

    if let Err(e) = db.insert_document(&document) {
        return internal_error("Failed to create document from template", e);
    }

    info!(
        template_id = %id,
        document_id = %document.id,
        "Created document from template"
    );
    HttpResponse::Created().json(document)
}

#[delete("/templates/{id}")]
pub async fn delete_template(id: web::Path<String>, db: web::Data<Database>) -> impl Responder {
    let id = id.into_inner();

    if find_builtin(&id).is_some() {
        warn!(template_id = %id, "Refused to delete built-in template");
        return bad_request("Built-in templates cannot be deleted");
    }

    match db.delete_template(&id) {
        Ok(true) => {
            info!(template_id = %id, "Deleted template");
            HttpResponse::NoContent().finish()
        }
        Ok(false) => {
            warn!(template_id = %id, "Template not found");
            not_found_error("Template not found")
        }
        Err(e) => internal_error("Failed to delete template", e),
    }
}
