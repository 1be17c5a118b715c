use super::{bad_request, internal_error, not_found_error};
use crate::storage::Database;
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use quill_types::{CreateFolderRequest, Folder};
use tracing::{info, warn};

#[get("/folders")]
pub async fn list_folders(db: web::Data<Database>) -> impl Responder {
    match db.list_folders() {
        Ok(folders) => HttpResponse::Ok().json(folders),
        Err(e) => internal_error("Failed to list folders", e),
    }
}

#[post("/folders")]
pub async fn create_folder(
    request: web::Json<CreateFolderRequest>,
    db: web::Data<Database>,
) -> impl Responder {
    let name = request
        .into_inner()
        .name
        .map(|n| n.trim().to_string())
        .unwrap_or_default();
    if name.is_empty() {
        warn!("Folder rejected: missing name");
        return bad_request("Folder name is required");
    }

    let folder = Folder::new(name);
    if let Err(e) = db.insert_folder(&folder) {
        return internal_error("Failed to create folder", e);
    }

    info!(folder_id = %folder.id, name = %folder.name, "Created folder");
    HttpResponse::Created().json(folder)
}

/// Documents inside the folder are kept and moved out of it.
#[delete("/folders/{id}")]
pub async fn delete_folder(id: web::Path<String>, db: web::Data<Database>) -> impl Responder {
    let id = id.into_inner();

    match db.delete_folder(&id) {
        Ok(true) => {
            info!(folder_id = %id, "Deleted folder");
            HttpResponse::NoContent().finish()
        }
        Ok(false) => {
            warn!(folder_id = %id, "Folder not found");
            not_found_error("Folder not found")
        }
        Err(e) => internal_error("Failed to delete folder", e),
    }
}
