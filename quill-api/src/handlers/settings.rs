use super::internal_error;
use crate::storage::Database;
use actix_web::{get, put, web, HttpResponse, Responder};
use quill_types::UpdateSettingsRequest;
use tracing::info;

#[get("/settings")]
pub async fn get_settings(db: web::Data<Database>) -> impl Responder {
    match db.load_settings() {
        Ok(settings) => HttpResponse::Ok().json(settings),
        Err(e) => internal_error("Failed to load settings", e),
    }
}

/// Partial update; omitted fields keep their stored values.
#[put("/settings")]
pub async fn update_settings(
    request: web::Json<UpdateSettingsRequest>,
    db: web::Data<Database>,
) -> impl Responder {
    let mut settings = match db.load_settings() {
        Ok(settings) => settings,
        Err(e) => return internal_error("Failed to load settings", e),
    };

    settings.apply(request.into_inner());

    if let Err(e) = db.save_settings(&settings) {
        return internal_error("Failed to save settings", e);
    }

    info!(theme = %settings.theme, ai_model = %settings.ai_model, "Updated settings");
    HttpResponse::Ok().json(settings)
}
